use tracing_subscriber::{fmt, prelude::*, util::TryInitError, EnvFilter};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to install the tracing subscriber: {0}")]
    Subscriber(#[from] TryInitError),
}

/// Sets up a global `tracing` subscriber filtered by `RUST_LOG`, then routes panics through it.
///
/// Fails if a global subscriber has already been installed, in which case the panic hook is
/// left alone as well.
pub fn init() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .try_init()?;

    install_panic_hook_handler();
    Ok(())
}

pub fn install_panic_hook_handler() {
    let prev = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |info| {
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s
        } else {
            "non-string payload"
        };

        let backtrace = std::backtrace::Backtrace::capture();
        let thread = std::thread::current();
        let thread_name = thread.name().unwrap_or("<unknown thread>");

        if let Some(location) = info.location() {
            tracing::error!(
                "thread '{thread_name}' panicked at: {}:{}:{}: '{payload}'\n{backtrace}",
                location.file(),
                location.line(),
                location.column(),
            );
        } else {
            tracing::error!("thread '{thread_name}' panicked: '{payload}'\n{backtrace}");
        }

        prev(info);
    }));
}
