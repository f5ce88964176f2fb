use crate::modules::leave_balances::core::records::ANNUAL_LEAVE_TYPE;
use crate::modules::leave_balances::use_cases::request_leave::command::RequestLeave;
use crate::modules::leave_balances::use_cases::request_leave::decision::{DecideError, Decision};

/// `available` is the remaining annual balance for the year the leave starts in.
pub fn decide_request_leave(command: RequestLeave, available: f64) -> Decision {
    if command.end_date < command.start_date {
        return Decision::Rejected {
            reason: DecideError::InvalidInterval,
        };
    }

    let span_days = (command.end_date - command.start_date).num_days() + 1;
    if !command.days_taken.is_finite()
        || command.days_taken <= 0.0
        || command.days_taken > span_days as f64
    {
        return Decision::Rejected {
            reason: DecideError::InvalidDays,
        };
    }

    if command.leave_type == ANNUAL_LEAVE_TYPE && command.days_taken > available {
        return Decision::Rejected {
            reason: DecideError::InsufficientBalance {
                requested: command.days_taken,
                available,
            },
        };
    }

    Decision::Accepted {
        row: command.into_row(),
    }
}
