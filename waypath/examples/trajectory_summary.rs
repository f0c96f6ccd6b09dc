//! Builds a short ferry trajectory and prints its derived metrics together with the mean and median position.

use chrono::{Duration, TimeZone, Utc};
use waypath::{Trajectory, TrajectoryPoint};
use waypath_types::algorithms::{geometric_mean, geometric_median};
use waypath_types::geo::{GeoPoint, GeoPoint2d, NewGeoPoint};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let start = Utc
        .with_ymd_and_hms(2024, 7, 14, 6, 30, 0)
        .single()
        .expect("valid start time");
    let positions = [
        (-122.4194, 37.8080),
        (-122.4100, 37.8120),
        (-122.3950, 37.8180),
        (-122.3800, 37.8150),
        (-122.3650, 37.8050),
    ];

    let mut trajectory: Trajectory<GeoPoint2d> = positions
        .iter()
        .enumerate()
        .map(|(i, &(lon, lat))| {
            TrajectoryPoint::new(
                "ferry-7",
                start + Duration::minutes(4 * i as i64),
                GeoPoint2d::lonlat(lon, lat),
            )
        })
        .collect();
    trajectory.properties_mut().set("vessel", "Golden Gate");

    for point in &trajectory {
        log::info!(
            "{} at ({:.4}, {:.4}): {:.3} km, length {:.2}, time {:.2}",
            point.timestamp(),
            point.point().lon(),
            point.point().lat(),
            point.current_length(),
            point.current_length_fraction(),
            point.current_time_fraction(),
        );
    }

    let points: Vec<GeoPoint2d> = trajectory.iter().map(|p| *p.point()).collect();
    let mean = geometric_mean(&points);
    log::info!("Mean position: ({:.4}, {:.4})", mean.lon(), mean.lat());

    match geometric_median(&points) {
        Ok(median) => log::info!("Median position: ({:.4}, {:.4})", median.lon(), median.lat()),
        Err(err) => log::error!("Failed to compute median position: {err}"),
    }

    log::info!(
        "Trajectory of {:?} is {:.3} km long and takes {} minutes",
        trajectory.object_id(),
        trajectory.length(),
        trajectory.duration().num_minutes()
    );
}
