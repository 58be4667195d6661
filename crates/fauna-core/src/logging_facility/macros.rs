//! Lifecycle macros for entity operations
//!
//! Every event carries `component`, `op` and `event`; terminal events add
//! `duration_ms`, and failures add `err_kind` and `err_code`. The keys match
//! the `FIELD_*` constants in [`crate::schema`]. Extra fields such as
//! `layout`, `species`, `animal_id` and `row_count` follow the fixed ones.
//!
//! Callers must depend on `tracing` directly.

/// Entry into an operation
///
/// ```
/// # use fauna_core::log_op_start;
/// log_op_start!("animal_query_all");
/// log_op_start!("animal_save", layout = "joined", species = "Dog");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($($field)*)?
        );
    };
}

/// Successful completion
///
/// ```
/// # use fauna_core::log_op_end;
/// log_op_end!("animal_save", duration_ms = 2u64, layout = "single_table", animal_id = 1i64);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)*)?
        );
    };
}

/// Failure; `$err` is anything that converts into `ExError`
///
/// ```
/// # use fauna_core::{log_op_error, FaunaError, Species};
/// let err = FaunaError::MissingName { species: Species::Cat };
/// log_op_error!("animal_save", err, duration_ms = 0u64, layout = "joined");
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($($field)*)?
        );
    }};
}
