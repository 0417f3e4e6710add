mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::DashboardHome;

mod sections;
pub use sections::{Appointments, MedicalHistory, Patients, Profile, Treatments};
