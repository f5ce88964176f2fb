pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod record_store;
    }
}

pub mod modules {
    pub mod leave_balances {
        pub mod core {
            pub mod policy;
            pub mod records;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod calculate_leave_balance {
                pub mod handler;
                pub mod outcome;
                pub mod query;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod request_leave {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod cancel_leave {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod set_leave_allocation {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
