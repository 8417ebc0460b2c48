mod ci;
mod inputs;
mod model;
mod refs;
mod release;
mod rewrite;
mod run;
mod tracker;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use inputs::ActionInputs;
use release::GitHubReleases;
use tracker::azure::AzureBoards;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let inputs = match ActionInputs::from_env() {
        Ok(inputs) => inputs,
        Err(err) => {
            ci::set_failed(&err.to_string());
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Updating release notes for release: {}", inputs.release_id);

    let releases = GitHubReleases::new(
        inputs.repo_owner.clone(),
        inputs.repo_name.clone(),
        inputs.repo_token.clone(),
    );
    let tracker = AzureBoards::new(
        inputs.ado_org.clone(),
        inputs.ado_project.clone(),
        &inputs.ado_pat,
    );

    match run::run(&inputs, &releases, &tracker).await {
        Ok(report) => {
            if !report.work_item_ids.is_empty() {
                if let Err(err) = ci::set_output("workItems", &report.joined()) {
                    ci::set_failed(&err.to_string());
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            ci::set_failed(&err.to_string());
            ExitCode::FAILURE
        }
    }
}
