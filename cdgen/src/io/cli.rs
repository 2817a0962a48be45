use std::path::PathBuf;

use anyhow::Result;
use cdap_rs::generator::{CapacityModel, InstanceParams, UniformRange};
use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Number of suppliers (incoming trucks)
    #[arg(long)]
    pub suppliers: usize,
    /// Number of customers (outgoing trucks)
    #[arg(long)]
    pub customers: usize,
    /// Number of inbound doors
    #[arg(long = "in_doors")]
    pub in_doors: usize,
    /// Number of outbound doors
    #[arg(long = "out_doors")]
    pub out_doors: usize,
    /// Minimum number of pallets per delivery
    #[arg(long = "pallets_min", default_value_t = 10)]
    pub pallets_min: u64,
    /// Maximum number of pallets per delivery
    #[arg(long = "pallets_max", default_value_t = 50)]
    pub pallets_max: u64,
    /// Minimum capacity of the inbound doors
    #[arg(long = "in_doors_min", default_value_t = 10)]
    pub in_doors_min: u64,
    /// Maximum capacity of the inbound doors
    #[arg(long = "in_doors_max", default_value_t = 80)]
    pub in_doors_max: u64,
    /// Minimum capacity of the outbound doors
    #[arg(long = "out_doors_min", default_value_t = 10)]
    pub out_doors_min: u64,
    /// Maximum capacity of the outbound doors
    #[arg(long = "out_doors_max", default_value_t = 80)]
    pub out_doors_max: u64,
    /// Minimum distance from an inbound door to an outbound door
    #[arg(long = "doors_distance_min", default_value_t = 8)]
    pub doors_distance_min: u64,
    /// Density of the supplier to customer demand matrix, in percent
    #[arg(long, default_value_t = 25.0)]
    pub density: f64,
    /// Capacity slackness of the doors, in percent.
    /// When set, door capacities are derived from the realized demand
    /// instead of being drawn from the capacity ranges.
    #[arg(long)]
    pub slackness: Option<f64>,
    /// Path of the output JSON file
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Maps the parsed arguments onto generator parameters.
    pub fn instance_params(&self) -> Result<InstanceParams> {
        let door_capacities = match self.slackness {
            Some(percent) => CapacityModel::Slackness {
                slackness: percent / 100.0,
            },
            None => CapacityModel::Range {
                in_doors: UniformRange::try_new(self.in_doors_min, self.in_doors_max)?,
                out_doors: UniformRange::try_new(self.out_doors_min, self.out_doors_max)?,
            },
        };
        Ok(InstanceParams {
            suppliers: self.suppliers,
            customers: self.customers,
            in_doors: self.in_doors,
            out_doors: self.out_doors,
            pallets: UniformRange::try_new(self.pallets_min, self.pallets_max)?,
            density: self.density,
            min_door_distance: self.doors_distance_min,
            door_capacities,
        })
    }
}
