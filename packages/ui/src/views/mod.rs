mod login;
pub use login::LoginView;

mod incident_list;
pub use incident_list::IncidentListView;

mod incident_detail;
pub use incident_detail::IncidentDetailView;

mod new_incident;
pub use new_incident::NewIncidentView;
