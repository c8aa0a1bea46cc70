use std::process;

use mcmigrate_cli::UserCancelled;

#[tokio::main]
async fn main() {
    if let Err(e) = mcmigrate_cli::main(std::env::args().collect::<Vec<String>>().as_slice()).await
    {
        if e.downcast_ref::<UserCancelled>().is_some() {
            return;
        }
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
