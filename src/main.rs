use anyhow::{Context, Result};
use clap::Parser;
use sitekit::config::Command;
use sitekit::utils::{logger, validation::Validate};
use sitekit::{
    build_query, form_body, format_length, format_month_abbrev, format_time_of_day, guid,
    is_valid_email, CalendarGenerator, CliConfig, DateStyle, Formatter, HttpClient, QueryParams,
    SiteError,
};

fn to_params(pairs: &[(String, String)]) -> QueryParams {
    pairs.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!("❌ {:#}", e);

        // 伺服器回傳的錯誤內容原樣輸出，方便除錯
        if let Some(body) = e.downcast_ref::<SiteError>().and_then(SiteError::body) {
            eprintln!("{}", body);
        }
        eprintln!("❌ {:#}", e);

        let exit_code = match e.downcast_ref::<SiteError>() {
            Some(SiteError::Status { .. }) => 2,
            Some(SiteError::Http(_)) => 3,
            _ => 1,
        };
        std::process::exit(exit_code);
    }
}

async fn run(cli: CliConfig) -> Result<()> {
    let config = cli.site_config()?;
    config.validate().context("Configuration validation failed")?;

    let formatter = Formatter::new(config.locale()?);
    let endpoints = config.endpoints()?;

    match cli.command {
        Command::Query { params } => {
            // 沒有任何有效參數時不輸出
            if let Some(query) = build_query(&to_params(&params)) {
                println!("{}", query);
            }
        }
        Command::Url { endpoint, params } => {
            println!("{}", endpoints.url(&endpoint, Some(&to_params(&params))));
        }
        Command::Get { endpoint, params } => {
            let url = endpoints.url(&endpoint, Some(&to_params(&params)));
            let client = HttpClient::new()?;
            let json: serde_json::Value = client
                .get_json(&url)
                .await
                .with_context(|| format!("GET {} failed", url))?;
            print_json(&json)?;
        }
        Command::Post { endpoint, body } => {
            let url = endpoints.url(&endpoint, None);
            let body: serde_json::Value =
                serde_json::from_str(&body).context("--body is not valid JSON")?;
            let client = HttpClient::new()?;
            let json: serde_json::Value = client
                .post_json(&url, &body)
                .await
                .with_context(|| format!("POST {} failed", url))?;
            print_json(&json)?;
        }
        Command::PostForm { endpoint, fields } => {
            let url = endpoints.url(&endpoint, None);
            let client = HttpClient::new()?;
            client
                .post_params(&url, form_body(&to_params(&fields)))
                .await
                .with_context(|| format!("POST {} failed", url))?;
            tracing::info!("✅ Form posted to {}", url);
        }
        Command::Currency { amount, currency } => {
            println!("{}", formatter.format_currency(amount, currency.as_deref()));
        }
        Command::Time { value } => {
            println!("{}", format_time_of_day(Some(&value)));
        }
        Command::Length { value, unit } => {
            println!("{}", format_length(Some(value), unit.as_deref()));
        }
        Command::Date { date, style } => {
            let style = DateStyle::from(style.as_str());
            println!("{}", formatter.format_date_str(&date, style)?);
        }
        Command::Month { name } => {
            println!("{}", format_month_abbrev(Some(&name)));
        }
        Command::Days { from, count, to } => {
            let calendar = CalendarGenerator::new(formatter.locale().localization());
            print_json(&calendar.day_items(from, count, to))?;
        }
        Command::Weeks { start, count } => {
            let calendar = CalendarGenerator::new(formatter.locale().localization());
            print_json(&calendar.week_numbers(start, count))?;
        }
        Command::Months { start, days } => {
            let calendar = CalendarGenerator::new(formatter.locale().localization());
            print_json(&calendar.month_names(start, days))?;
        }
        Command::Email { address } => {
            let valid = is_valid_email(&address);
            println!("{}", valid);
            if !valid {
                std::process::exit(1);
            }
        }
        Command::Guid => {
            println!("{}", guid());
        }
    }

    Ok(())
}
