use pdf_color_pages::cli::Args;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_normalized();
    init_tracing(args.debug);

    match pdf_color_pages::run(&args) {
        Ok(output) => {
            tracing::debug!(report = %output.title, "Finished");
            print!("{}", output.copyable_text());
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
