//! Station density table for the heatmap panel.
//!
//! Intensity is a stored column rather than derived from the
//! passenger/capacity ratio; two rows (Town Hall, Maharajas) sit on the
//! other side of the derived thresholds. See DESIGN.md.

use crate::models::{LoadIntensity, StationLoad, Trend};

fn station(
    name: &str,
    passengers: u32,
    capacity: u32,
    trend: Trend,
    intensity: LoadIntensity,
) -> StationLoad {
    StationLoad {
        name: name.to_string(),
        passengers,
        capacity,
        trend,
        intensity,
    }
}

pub fn station_loads() -> Vec<StationLoad> {
    use LoadIntensity::{Critical, High, Low, Medium};
    use Trend::{Down, Stable, Up};
    vec![
        station("Aluva", 450, 600, Up, High),
        station("Pulinchodu", 180, 400, Stable, Low),
        station("Companypady", 220, 400, Down, Medium),
        station("Ambattukavu", 160, 350, Stable, Low),
        station("Muttom", 280, 450, Up, Medium),
        station("Kalamassery", 520, 650, Up, High),
        station("Cusat", 340, 500, Stable, Medium),
        station("Pathadipalam", 190, 400, Down, Low),
        station("Edapally", 680, 750, Up, Critical),
        station("Changampuzha Park", 320, 500, Stable, Medium),
        station("Palarivattom", 590, 700, Up, High),
        station("JLN Stadium", 420, 600, Down, Medium),
        station("Kaloor", 750, 800, Up, Critical),
        station("Town Hall", 650, 750, Stable, High),
        station("MG Road", 820, 900, Up, Critical),
        station("Maharajas", 480, 650, Down, Medium),
        station("Ernakulam South", 720, 800, Up, Critical),
        station("Kadavanthra", 380, 550, Stable, Medium),
        station("Elamkulam", 290, 450, Down, Medium),
        station("Vyttila", 560, 700, Up, High),
        station("Thaikoodam", 340, 500, Stable, Medium),
        station("Pettah", 480, 600, Up, High),
    ]
}
