use clap::Parser;
use sheet2json::{cli, config, converter, logging};
use cli::{Cli, Commands};
use config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Convert { input, output, settings_sheet, exclude, pretty } => {
            println!("📊 sheet2json - 変換\n");
            config.apply_overrides(settings_sheet, &exclude, output, pretty);

            println!("[1/2] ワークブックを読み込み・変換中... ({})", input.display());
            let summary = converter::convert_workbook(
                &input,
                &config.output_dir,
                config.transform_options(),
                config.pretty,
            )?;

            for status in &summary.outcome.statuses {
                match status.records {
                    Some(count) => println!("  ✔ {} ({}件)", status.name, count),
                    None => println!("  - {} スキップ: {}", status.name, status.decision),
                }
            }
            for message in &summary.unreadable {
                println!("  ✖ {}", message);
            }
            println!(
                "✔ 変換完了 (カテゴリ {}件, シート {}枚, スキップ {}枚)\n",
                summary.outcome.mappings.len(),
                summary.outcome.sheets.len(),
                summary.outcome.skipped().count()
            );

            println!("[2/2] JSONを保存中... ({})", config.output_dir.display());
            for path in &summary.report.written {
                println!("  💾 {}", path.display());
            }
            for failed in &summary.report.failed {
                println!("  ✖ {}: {}", failed.path.display(), failed.error);
            }

            if !summary.is_success() {
                anyhow::bail!(
                    "{}件のシートを出力できませんでした",
                    summary.report.failed.len() + summary.unreadable.len()
                );
            }
            println!("\n✅ 完了 ({}ファイル)", summary.report.written.len());
        }

        Commands::Mappings { input, settings_sheet } => {
            config.apply_overrides(settings_sheet, &[], None, false);
            let mapping = converter::load_mappings(&input, config.transform_options())?;
            println!("{}", serde_json::to_string_pretty(&mapping)?);
        }

        Commands::Sheets { input, settings_sheet, exclude, json } => {
            config.apply_overrides(settings_sheet, &exclude, None, false);
            let statuses = converter::survey_workbook(&input, config.transform_options())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&statuses)?);
            } else {
                for status in statuses {
                    println!("{}\t{}", status.name, status.decision);
                }
            }
        }

        Commands::Config { show, set_settings_sheet, add_excluded, remove_excluded, set_output_dir } => {
            let mut changed = false;

            if let Some(name) = set_settings_sheet {
                config.settings_sheet = name;
                changed = true;
            }
            for name in add_excluded {
                changed |= config.excluded_sheets.insert(name);
            }
            for name in remove_excluded {
                changed |= config.excluded_sheets.remove(&name);
            }
            if let Some(dir) = set_output_dir {
                config.output_dir = dir;
                changed = true;
            }

            if changed {
                config.transform_options().validate()?;
                let saved_to = match &cli.config {
                    Some(path) => {
                        config.save_to(path)?;
                        path.clone()
                    }
                    None => {
                        config.save()?;
                        Config::config_path()?
                    }
                };
                println!("✔ 設定を保存しました: {}", saved_to.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  設定シート: {}", config.settings_sheet);
                let excluded: Vec<_> = config.excluded_sheets.iter().map(String::as_str).collect();
                println!("  除外シート: {}", excluded.join(", "));
                println!("  出力先: {}", config.output_dir.display());
                println!("  整形出力: {}", if config.pretty { "有効" } else { "無効" });
            }
        }
    }

    Ok(())
}
