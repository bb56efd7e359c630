//! Index a custom point type and query it for the closest city.

use kd_index::kdtree::metric::Euclidean;
use kd_index::kdtree::KdTree;
use kd_index::Point;

#[derive(Debug, Clone)]
struct City {
    name: &'static str,
    lon: f64,
    lat: f64,
}

impl City {
    fn new(name: &'static str, lon: f64, lat: f64) -> Self {
        Self { name, lon, lat }
    }
}

impl Point for City {
    type Scalar = f64;

    fn dimensions(&self) -> usize {
        2
    }

    fn value(&self, axis: usize) -> f64 {
        if axis == 0 {
            self.lon
        } else {
            self.lat
        }
    }
}

fn main() {
    let cities = vec![
        City::new("Berlin", 13.41, 52.52),
        City::new("Paris", 2.35, 48.86),
        City::new("Madrid", -3.70, 40.42),
        City::new("Rome", 12.50, 41.90),
        City::new("Warsaw", 21.01, 52.23),
        City::new("Vienna", 16.37, 48.21),
    ];

    let mut tree = KdTree::new(cities, Euclidean);
    println!("{} cities indexed over {} axes", tree.size(), tree.dimensions());

    let query = City::new("somewhere in the Netherlands", 4.9, 52.4);
    let found = tree.nearest(&query).unwrap();
    println!("closest to ({:.2}, {:.2}): {}", query.lon, query.lat, found.name);

    tree.insert(City::new("Amsterdam", 4.90, 52.37)).unwrap();
    let found = tree.nearest(&query).unwrap();
    println!("after inserting Amsterdam:  {}", found.name);
}
