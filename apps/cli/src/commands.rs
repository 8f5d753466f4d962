use color_eyre::Result;
use guardrail_web::charts::{
    category_chart_config, violation_chart_config, CATEGORY_CANVAS, VIOLATION_CANVAS,
};
use guardrail_web::render::{
    render_check_result, render_country_detail, render_insights, render_updates,
};
use guardrail_web::{ApiClient, CheckForm, Transport};
use serde_json::json;

use crate::cli::CliCommand;

/// Run one subcommand and return what should be printed.
pub async fn execute<T: Transport>(
    api: &ApiClient<T>,
    command: CliCommand,
    json: bool,
) -> Result<String> {
    match command {
        CliCommand::Check(args) => {
            let request = CheckForm::from(args).into_request()?;
            let result = api.submit_check(&request).await?;
            tracing::info!(
                status = result.status.as_str(),
                violations = result.violations.len(),
                "check completed"
            );
            if json {
                return Ok(serde_json::to_string_pretty(&result)?);
            }
            Ok(render_check_result(&result))
        }
        CliCommand::Country { id } => {
            let detail = api.fetch_country_detail(&id).await?;
            if json {
                return Ok(serde_json::to_string_pretty(&detail)?);
            }
            Ok(render_country_detail(&detail))
        }
        CliCommand::Updates => {
            let updates = api.fetch_updates().await?;
            if json {
                return Ok(serde_json::to_string_pretty(&updates)?);
            }
            Ok(render_updates(&updates))
        }
        CliCommand::Analytics => {
            let data = api.fetch_analytics().await?;
            let charts = json!({
                VIOLATION_CANVAS: violation_chart_config(&data),
                CATEGORY_CANVAS: category_chart_config(&data),
            });
            if json {
                let output = json!({ "charts": charts, "insights": data.insights });
                return Ok(serde_json::to_string_pretty(&output)?);
            }

            let mut output = serde_json::to_string_pretty(&charts)?;
            if let Some(cards) = render_insights(&data.insights) {
                output.push('\n');
                output.push_str(&cards);
            }
            Ok(output)
        }
    }
}
