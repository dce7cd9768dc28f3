mod login;
pub use login::Login;

mod shell;
pub use shell::Shell;

mod incidents;
pub use incidents::Incidents;

mod incident_detail;
pub use incident_detail::IncidentDetail;

mod new_incident;
pub use new_incident::NewIncident;
