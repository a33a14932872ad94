use crate::core::domain::Identifiable;
use crate::core::library::ReadStatus;

pub mod model;

// BookRecord is the read-only view shared by shelved books and their projections.
pub trait BookRecord: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn pages(&self) -> i64;
    fn cover(&self) -> &str;
    fn have_read(&self) -> bool;

    fn read_status(&self) -> ReadStatus {
        ReadStatus::from(self.have_read())
    }

    fn description(&self) -> String {
        format!("{} by {}, {} pages, {}", self.title(), self.author(), self.pages(), self.read_status())
    }
}
