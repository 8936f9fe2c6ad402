use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match versa_conformance_cli::run().await {
        Ok(verdict) => verdict.exit_code(),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
