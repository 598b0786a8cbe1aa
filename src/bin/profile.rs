use std::time::Duration;

use mazeweaver::app::App;

fn main() -> std::io::Result<()> {
    let file_appender = tracing_appender::rolling::never(".", "mazeweaver-profile.log");
    let (log_writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(log_writer)
        .with_ansi(false)
        .init();

    let app = App {
        rows: 255,
        cols: 255,
        interval: Duration::ZERO,
        seed: Some(0),
        ..App::default()
    };

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok());
    app.profile(num_iters)
}
