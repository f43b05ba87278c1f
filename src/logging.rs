//! Log sink setup.
//!
//! `tracing` events are forwarded to the `log` facade (the crate is built with
//! tracing's `log` feature and no subscriber is installed), so one
//! `env_logger` backend carries both our events and actix's request log.

use std::io::Write;

use env_logger::{Builder, Target};

pub fn init_logger(filter: &str) -> Result<(), log::SetLoggerError> {
    Builder::new()
        .parse_filters(filter)
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} [{}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
}
