#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelLeave {
    pub leave_id: String,
    pub employee_id: String,
}
