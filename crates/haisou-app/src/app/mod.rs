//! Application use cases

mod balance_service;

pub use balance_service::{
    run_balance, BalanceOptions, BalanceRunResult, BalanceServiceError,
};
