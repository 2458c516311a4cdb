//! Road maps: a weighted graph of cities plus the metadata needed to print
//! them and to estimate distances between them. Maps are described in TOML,
//! see `maps/romania.toml` for the format.

use crate::search::{error::RoadMapError, Cost, WeightedGraph};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::Path, str::FromStr};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{info, warn};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RoadMapConfig {
    pub name: String,
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub cities: Vec<CityConfig>,
    #[serde(default)]
    pub roads: Vec<RoadConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CityConfig {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<[f64; 2]>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RoadConfig {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub name: String,
    pub location: Option<(f64, f64)>,
}

#[derive(Debug, Clone)]
pub struct RoadMap {
    name: String,
    graph: WeightedGraph<String>,
    cities: HashMap<String, City>,
}

impl RoadMap {
    pub fn from_config(config: RoadMapConfig) -> Result<Self, RoadMapError> {
        let mut cities = HashMap::new();
        for city in config.cities {
            let entry = City {
                name: city.name.unwrap_or_else(|| city.id.clone()),
                location: city.location.map(|[x, y]| (x, y)),
            };
            if cities.insert(city.id.clone(), entry).is_some() {
                return Err(RoadMapError::DuplicateCity(city.id));
            }
        }

        let mut graph = WeightedGraph::new_directed();
        for road in config.roads {
            for id in [&road.from, &road.to] {
                if !cities.contains_key(id) {
                    return Err(RoadMapError::UnknownCity(id.clone()));
                }
            }
            if road.distance < 0. || road.distance.is_nan() {
                return Err(RoadMapError::InvalidDistance {
                    from: road.from,
                    to: road.to,
                    distance: road.distance,
                });
            }
            if !config.directed {
                if let Some(reverse) = graph.weight(&road.to, &road.from) {
                    if reverse != OrderedFloat(road.distance) {
                        warn!(
                            from = %road.from,
                            to = %road.to,
                            distance = road.distance,
                            reverse_distance = reverse.into_inner(),
                            "asymmetric road in undirected map, keeping the distance \
                             declared from the earlier road source"
                        );
                    }
                }
            }
            graph.connect(road.from, road.to, OrderedFloat(road.distance));
        }
        let mut ids: Vec<&String> = cities.keys().collect();
        ids.sort();
        for id in ids {
            graph.add_state(id.clone());
        }
        if !config.directed {
            graph.make_undirected();
        }

        info!(map = %config.name, cities = graph.len(), "loaded road map");
        Ok(Self {
            name: config.name,
            graph,
            cities,
        })
    }

    pub fn from_text(text: &str) -> Result<Self, RoadMapError> {
        let config: RoadMapConfig = toml::from_str(text)?;
        Self::from_config(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, RoadMapError> {
        let text = std::fs::read_to_string(path).map_err(|source| RoadMapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&text)
    }

    /// Load a built-in map by name (e.g. `romania`), or else a map file.
    pub fn load(name_or_path: &str) -> Result<Self, RoadMapError> {
        match BuiltinMap::from_str(name_or_path) {
            Ok(builtin) => builtin.load(),
            Err(_) => Self::from_path(Path::new(name_or_path)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn graph(&self) -> &WeightedGraph<String> {
        &self.graph
    }

    pub fn city(&self, id: &str) -> Option<&City> {
        self.cities.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.cities.contains_key(id)
    }

    /// Display name of a city, falling back to its id.
    pub fn city_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.cities.get(id).map_or(id, |city| city.name.as_str())
    }

    pub fn neighbours(&self, id: &String) -> &[(String, Cost)] {
        self.graph.neighbours(id)
    }

    /// Euclidean distance between the locations of two cities, if both are
    /// known.
    pub fn straight_line_distance(&self, from: &str, to: &str) -> Option<f64> {
        let (x1, y1) = self.cities.get(from)?.location?;
        let (x2, y2) = self.cities.get(to)?.location?;
        Some((x1 - x2).hypot(y1 - y2))
    }
}

/// Maps shipped with the crate.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[clap(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BuiltinMap {
    Romania,
    Australia,
}

impl BuiltinMap {
    pub fn text(&self) -> &'static str {
        match self {
            BuiltinMap::Romania => include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/maps/romania.toml"
            )),
            BuiltinMap::Australia => include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/maps/australia.toml"
            )),
        }
    }

    pub fn load(&self) -> Result<RoadMap, RoadMapError> {
        RoadMap::from_text(self.text())
    }
}
