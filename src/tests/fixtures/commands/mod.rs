pub mod request_leave;
