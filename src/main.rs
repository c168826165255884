use car_inventory::app::{AssumeYes, CarForm, PageController, TerminalConfirm};
use car_inventory::config::cli::{CarArgs, Command};
use car_inventory::core::{Confirm, InventoryApi, Storage};
use car_inventory::utils::logger;
use car_inventory::{
    CarList, CliConfig, CsvExporter, HttpInventoryApi, LocalStorage, Result, Settings,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    if let Err(e) = run(cli.command, settings).await {
        tracing::error!("❌ Command failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

async fn run(command: Command, settings: Settings) -> Result<()> {
    let api = HttpInventoryApi::from_config(&settings)?;
    tracing::debug!("Using inventory server at {}", api.base_url());

    match command {
        Command::List => {
            let mut controller = PageController::new(api, AssumeYes);
            controller.load_table(None).await;
            println!("{}", controller.table());
        }
        Command::Save(args) => {
            let mut controller = PageController::new(api, AssumeYes);
            if !CarForm::from(&args).is_new() {
                // start from the stored values so unset flags keep them
                controller.load_table(None).await;
                if let Some(car) = controller.find_car(&args.id).cloned() {
                    controller.edit(&car);
                }
            }
            apply_args(&mut controller.car_form, &args);
            controller.submit_car().await;
            println!("{}", controller.table());
        }
        Command::Delete { id, yes } => {
            if yes {
                delete_by_id(PageController::new(api, AssumeYes), &id).await;
            } else {
                delete_by_id(PageController::new(api, TerminalConfirm), &id).await;
            }
        }
        Command::Styles => {
            let mut controller = PageController::new(api, AssumeYes);
            controller.update_styles(None).await;
            print_styles(controller.style_options());
        }
        Command::AddStyle { name, description } => {
            let mut controller = PageController::new(api, AssumeYes);
            controller.style_form.name = name;
            controller.style_form.description = description;
            controller.submit_style().await;
            print_styles(controller.style_options());
        }
        Command::ExportRemote => {
            let controller = PageController::new(api, AssumeYes);
            println!("{}", controller.export_csv().await);
        }
        Command::Export { from_file, .. } => {
            let cars = match from_file {
                Some(path) => {
                    let bytes = LocalStorage::default().read_file(&path).await?;
                    serde_json::from_slice::<CarList>(&bytes)?
                }
                None => api.list_cars().await?,
            };

            let path = settings.export_path_or_default(chrono::Local::now());
            let exporter =
                CsvExporter::new(LocalStorage::default()).with_format(settings.export_format);
            let report = exporter.create(path, cars.records).finish().await?;

            tracing::info!("✅ CSV export completed");
            println!("✅ Exported {} cars", report.records);
            println!("📁 Output saved to: {}", report.path);
        }
    }

    Ok(())
}

async fn delete_by_id<P: Confirm>(mut controller: PageController<HttpInventoryApi, P>, id: &str) {
    controller.load_table(None).await;

    let Some(car) = controller.find_car(id).cloned() else {
        tracing::warn!("No car with id {} in the inventory", id);
        eprintln!("No car with id {}", id);
        return;
    };

    if controller.delete(&car).await {
        println!("{}", controller.table());
    } else {
        println!("Deletion cancelled.");
    }
}

fn apply_args(form: &mut CarForm, args: &CarArgs) {
    let overrides = CarForm::from(args);
    let fields = [
        (&mut form.id, overrides.id),
        (&mut form.model, overrides.model),
        (&mut form.brand, overrides.brand),
        (&mut form.year, overrides.year),
        (&mut form.price, overrides.price),
        (&mut form.color, overrides.color),
        (&mut form.style_select, overrides.style_select),
    ];
    for (field, value) in fields {
        if !value.is_empty() {
            *field = value;
        }
    }
}

fn print_styles(options: &[String]) {
    if options.is_empty() {
        println!("There are no styles.");
        return;
    }
    for name in options {
        println!("- {}", name);
    }
}
