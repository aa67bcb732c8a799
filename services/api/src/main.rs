use timecard_api::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("timecard error: {err}");
        std::process::exit(1);
    }
}
