use clap::{Parser, Subcommand};
use garden_core::*;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "garden")]
#[command(about = "Garden planning calculators", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Read defaults from this config file instead of the standard location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// How many plants fit in a bed at a given spacing
    Spacing {
        /// Bed length (feet)
        #[arg(long)]
        length: Option<f64>,

        /// Bed width (feet)
        #[arg(long)]
        width: Option<f64>,

        /// Distance between plants (inches)
        #[arg(long)]
        spacing: Option<f64>,
    },

    /// Seeds to sow, allowing for germination failures
    Seeds {
        /// Garden area (sq ft)
        #[arg(long)]
        area: Option<f64>,

        /// Seeds per square foot
        #[arg(long)]
        seeds_per_sq_ft: Option<f64>,

        /// Germination rate (%)
        #[arg(long)]
        germination_rate: Option<f64>,

        /// vegetables, flowers, herbs, grass
        #[arg(long)]
        plant_type: Option<SeedPlantType>,
    },

    /// Soil needed to fill a raised bed
    Soil {
        /// rectangle or circle
        #[arg(long)]
        shape: Option<BedShape>,

        /// Bed length, or diameter for a circle (feet)
        #[arg(long)]
        length: Option<f64>,

        /// Bed width (feet)
        #[arg(long)]
        width: Option<f64>,

        /// Fill depth (inches)
        #[arg(long)]
        depth: Option<f64>,
    },

    /// Weekly watering schedule
    Water {
        /// Garden area (sq ft)
        #[arg(long)]
        area: Option<f64>,

        /// vegetables, flowers, herbs, lawn
        #[arg(long)]
        plant_type: Option<PlantType>,

        /// spring, summer, fall, winter
        #[arg(long)]
        season: Option<Season>,

        /// sand, loam, clay
        #[arg(long)]
        soil_type: Option<SoilType>,
    },

    /// Area, acreage, and perimeter of a plot
    Area {
        /// rectangle, circle, triangle
        #[arg(long)]
        shape: Option<AreaShape>,

        /// Length, or base for a triangle (feet)
        #[arg(long)]
        length: Option<f64>,

        /// Width, or height for a triangle (feet)
        #[arg(long)]
        width: Option<f64>,

        /// Radius of a circle (feet)
        #[arg(long)]
        radius: Option<f64>,
    },

    /// Expected harvest for a number of plants
    Harvest {
        /// tomatoes, peppers, lettuce, beans, carrots, cucumbers
        #[arg(long)]
        crop: Option<Crop>,

        /// Variety of the crop (see `garden varieties`)
        #[arg(long)]
        variety: Option<Variety>,

        /// Number of plants
        #[arg(long)]
        plants: Option<f64>,
    },

    /// List crop varieties with their yields
    Varieties {
        /// Only show this crop
        #[arg(long)]
        crop: Option<Crop>,
    },

    /// Answer a JSON Lines file of calculations ("-" for stdin)
    Batch {
        input: PathBuf,
    },

    /// Write a config file holding the default settings
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    garden_core::logging::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let json = cli.json;

    let command = match cli.command {
        Commands::InitConfig { force } => return cmd_init_config(cli.config, force),
        Commands::Batch { input } => return cmd_batch(&input),
        Commands::Varieties { crop } => return cmd_varieties(crop, json),
        other => other,
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let errors = validate_yield_table();
    if !errors.is_empty() {
        eprintln!("Yield table validation errors:");
        for error in &errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::TableValidation("Invalid yield table".into()));
    }

    let calculation = build_calculation(command, &config)?;
    cmd_calculate(&calculation, json)
}

/// Fill unset options from the config, the way a form starts pre-selected
fn build_calculation(command: Commands, config: &Config) -> Result<Calculation> {
    let calculation = match command {
        Commands::Spacing {
            length,
            width,
            spacing,
        } => Calculation::Spacing(SpacingInput {
            length,
            width,
            plant_spacing_inches: spacing,
        }),
        Commands::Seeds {
            area,
            seeds_per_sq_ft,
            germination_rate,
            plant_type,
        } => Calculation::Seeds(SeedInput {
            area_sq_ft: area,
            seeds_per_sq_ft,
            germination_rate_percent: Some(
                germination_rate.unwrap_or(config.seeds.germination_rate),
            ),
            plant_type: plant_type.unwrap_or(config.seeds.plant_type),
        }),
        Commands::Soil {
            shape,
            length,
            width,
            depth,
        } => Calculation::Soil(SoilInput {
            length,
            width,
            depth_inches: depth,
            shape: shape.unwrap_or(config.shapes.soil),
        }),
        Commands::Water {
            area,
            plant_type,
            season,
            soil_type,
        } => Calculation::Watering(WaterInput {
            area_sq_ft: area,
            plant_type: plant_type.unwrap_or(config.watering.plant_type),
            season: season.unwrap_or(config.watering.season),
            soil_type: soil_type.unwrap_or(config.watering.soil_type),
        }),
        Commands::Area {
            shape,
            length,
            width,
            radius,
        } => Calculation::Area(AreaInput {
            shape: shape.unwrap_or(config.shapes.area),
            length,
            width,
            radius,
        }),
        Commands::Harvest {
            crop,
            variety,
            plants,
        } => {
            let crop = crop.unwrap_or(config.harvest.crop);
            // A configured variety only applies to the configured crop
            let variety = variety.unwrap_or_else(|| {
                if crop == config.harvest.crop {
                    config.harvest.variety
                } else {
                    Variety::Standard
                }
            });
            Calculation::Harvest(HarvestInput {
                crop,
                variety,
                plants,
            })
        }
        Commands::Varieties { .. } | Commands::Batch { .. } | Commands::InitConfig { .. } => {
            return Err(Error::Other("not a calculation".into()));
        }
    };

    Ok(calculation)
}

fn cmd_calculate(calculation: &Calculation, json: bool) -> Result<()> {
    let outcome = calculation.compute_required()?;

    let missing = calculation.missing_fields();
    if !missing.is_empty() {
        tracing::warn!(
            "{}: {} left blank, treated as zero",
            calculation.name(),
            missing.join(", ")
        );
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        display_outcome(&outcome);
    }

    Ok(())
}

fn cmd_batch(input: &Path) -> Result<()> {
    let records = if input.as_os_str() == "-" {
        run_batch(io::stdin().lock())?
    } else {
        run_batch(BufReader::new(File::open(input)?))?
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for record in &records {
        serde_json::to_writer(&mut out, record)?;
        writeln!(out)?;
    }

    Ok(())
}

fn cmd_varieties(crop: Option<Crop>, json: bool) -> Result<()> {
    let crops: Vec<Crop> = match crop {
        Some(crop) => vec![crop],
        None => Crop::ALL.to_vec(),
    };

    if json {
        let rows: Vec<_> = crops
            .iter()
            .flat_map(|crop| {
                varieties_for(*crop).into_iter().map(move |variety| {
                    serde_json::json!({
                        "crop": crop,
                        "variety": variety,
                        "yield_per_plant_lbs": tables::yield_per_plant(*crop, variety),
                        "weeks_of_harvest": tables::weeks_of_harvest(*crop),
                    })
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for crop in crops {
        println!(
            "{} ({} week harvest)",
            crop,
            tables::weeks_of_harvest(crop)
        );
        for variety in varieties_for(crop) {
            let lbs = tables::yield_per_plant(crop, variety)
                .unwrap_or(tables::FALLBACK_YIELD_LBS);
            println!("  → {:<12} {} lbs/plant", variety, lbs);
        }
    }

    Ok(())
}

fn cmd_init_config(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => Config::default_config_path()?,
    };

    if path.exists() && !force {
        return Err(Error::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(&path)?;
    println!("✓ Wrote default config to {}", path.display());
    Ok(())
}

fn display_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Spacing(r) => {
            header("PLANT SPACING");
            row("Total Plants", r.total_plants);
            row("Garden Area", format!("{} sq ft", r.area_sq_ft));
            row("Plants per Row", r.plants_per_row);
            row("Number of Rows", r.number_of_rows);
            row("Plants per Sq Ft", format!("{:.2}", r.plants_per_sq_ft));
            row("Spacing in Feet", format!("{:.2} ft", r.spacing_ft));
        }
        Outcome::Seeds(r) => {
            header("SEED QUANTITY");
            row("Seeds Needed", r.seeds_needed);
            row("Base Seeds", r.total_seeds);
            row("Extra Seeds", r.extra_seeds);
            row("Germination Rate", format!("{}%", r.germination_rate_percent));
        }
        Outcome::Soil(r) => {
            header("SOIL VOLUME");
            row("Cubic Feet", format!("{:.2}", r.cubic_feet));
            row("Cubic Yards", format!("{:.2}", r.cubic_yards));
            row("Bags Needed", format!("{} bags", r.bags));
        }
        Outcome::Watering(r) => {
            header("WATERING SCHEDULE");
            row("Inches per Week", format!("{:.2}\"", r.inches_per_week));
            row("Gallons per Week", format!("{:.1}", r.gallons_per_week));
            row("Minutes per Week", r.minutes_per_week);
            row("Daily Minutes", r.daily_minutes);
        }
        Outcome::Area(r) => {
            header("GARDEN AREA");
            row("Square Feet", format!("{:.2}", r.square_feet));
            row("Acres", format!("{:.4}", r.acres));
            row("Perimeter", format!("{:.2} ft", r.perimeter));
        }
        Outcome::Harvest(r) => {
            header("HARVEST ESTIMATE");
            row("Total Yield", format!("{:.1} lbs", r.total_yield_lbs));
            row("Weekly Yield", format!("{:.1} lbs", r.weekly_yield_lbs));
            row("Harvest Period", format!("{} weeks", r.weeks_of_harvest));
            row("Per Plant", format!("{} lbs", r.yield_per_plant_lbs));
        }
    }
    println!();
}

fn header(title: &str) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {}", title);
    println!("╰─────────────────────────────────────────╯");
    println!();
}

fn row(label: &str, value: impl std::fmt::Display) {
    println!("  {:<18} {}", label, value);
}
