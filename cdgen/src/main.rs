use anyhow::Result;
use cdap_rs::generator::generate_instance;
use cdap_rs::io::export;
use cdgen::io;
use cdgen::io::cli::Cli;
use clap::Parser as ClapParser;
use log::info;
use rand::SeedableRng;
use rand::prelude::SmallRng;
use thousands::Separable;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;
    io::check_json_path(&args.output)?;

    let params = args.instance_params()?;
    info!("[MAIN] parsed instance parameters: {params:?}");

    let mut rng = SmallRng::from_os_rng();
    let instance = generate_instance(&params, &mut rng)?;

    info!(
        "[MAIN] sampled {} deliveries totalling {} pallets",
        instance.n_deliveries().separate_with_commas(),
        instance.total_pallets().separate_with_commas()
    );

    // the output file is only created once generation has succeeded
    io::write_json(&export(&instance), &args.output)
}
