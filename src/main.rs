use argh::FromArgs;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use huddle::kmeans::KMeans;

#[derive(FromArgs)]
/// Run Lloyd's k-means over synthetic Gaussian blobs.
struct Args {
    /// number of clusters
    #[argh(option, short = 'k', default = "4")]
    n_clusters: u32,
    /// number of Lloyd iterations
    #[argh(option, default = "25")]
    max_iters: u32,
    /// points to generate per cluster
    #[argh(option, default = "256")]
    points_per_cluster: usize,
    /// dimension of the generated points
    #[argh(option, default = "8")]
    dim: usize,
    /// seed for both the data and the clustering
    #[argh(option)]
    seed: Option<u64>,
}

fn main() {
    logforth::builder()
        .dispatch(|dispatch| {
            dispatch
                .filter(log::LevelFilter::Debug)
                .append(logforth::append::Stderr::default())
        })
        .apply();

    let args: Args = argh::from_env();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    // one blob per cluster, spread apart along every axis
    let noise = Normal::new(0.0, 0.5).expect("valid stddev");
    let mut points = Vec::with_capacity(args.n_clusters as usize * args.points_per_cluster * args.dim);
    for blob in 0..args.n_clusters {
        let center = f64::from(blob) * 8.0;
        for _ in 0..args.points_per_cluster {
            for _ in 0..args.dim {
                points.push(center + noise.sample(&mut rng));
            }
        }
    }

    let kmeans = KMeans::new(args.n_clusters, args.max_iters).expect("valid configuration");
    let clustering = kmeans
        .fit_with_rng(&points, args.dim, &mut rng)
        .expect("failed to fit");

    let mut sizes = vec![0usize; args.n_clusters as usize];
    for &label in &clustering.labels {
        sizes[label as usize] += 1;
    }
    info!("cluster sizes: {:?}", sizes);
}
