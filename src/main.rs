use certprobe::{cli, error, probe};

#[tokio::main]
async fn main() {
    env_logger::init();

    let request = match cli::parse(std::env::args().skip(1)) {
        Ok(request) => request,
        Err(err) => {
            println!("{err}");
            cli::usage();
            std::process::exit(-1);
        }
    };

    // Any completed HTTP exchange exits 0, whatever the status code says.
    let mut stdout = std::io::stdout();
    if let Err(err) = probe::run(&request, &mut stdout).await {
        eprintln!("{}", error::report(&err));
        std::process::exit(1);
    }
}
