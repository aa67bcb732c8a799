use super::rejection::{BusinessError, ErrorKey};

pub const MIN_WORKING_HOURS: f64 = 4.0;
pub const MAX_WORKING_HOURS: f64 = 8.0;

/// Accepts hours within `[MIN_WORKING_HOURS, MAX_WORKING_HOURS]`, both ends inclusive.
pub fn check_working_hours(hours: f64) -> Result<(), BusinessError> {
    if (MIN_WORKING_HOURS..=MAX_WORKING_HOURS).contains(&hours) {
        Ok(())
    } else {
        Err(BusinessError::new(ErrorKey::WrongWorkingHours))
    }
}
