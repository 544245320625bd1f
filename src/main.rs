use mateapps::ShellError;

#[tokio::main]
async fn main() {
    if let Err(e) = mateapps::cli::run().await {
        // Attach the stable code when the root cause is one of ours
        match e.downcast_ref::<ShellError>() {
            Some(shell_err) => eprintln!("Error [{}]: {:#}", shell_err.code(), e),
            None => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }
}
