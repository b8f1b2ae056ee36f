use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("debug")
            .add_directive(
                "hyper=info"
                    .parse()
                    .expect("assert: can parse env filter directive"),
            )
            .add_directive(
                "jsonrpsee_core=info"
                    .parse()
                    .expect("assert: can parse env filter directive"),
            )
            .add_directive(
                "jsonrpsee_http_client=info"
                    .parse()
                    .expect("assert: can parse env filter directive"),
            )
    });

    let format = fmt::format()
        .with_timer(fmt::time::time())
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::Layer::default()
                .with_writer(std::io::stdout)
                .event_format(format),
        )
        .init();
}
