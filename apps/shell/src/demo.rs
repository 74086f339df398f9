use std::collections::BTreeMap;
use tracing::{info, warn};
use uni::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Fruit {
    pub(crate) color: &'static str,
    pub(crate) mass: u32,
}

pub(crate) fn robert() -> Student {
    Student {
        administration_id: "452115r".to_owned(),
        last_name: "Robert".to_owned(),
        first_name: "DELACREUSE".to_owned(),
        attended_classes: vec![Course::ComputerScience, Course::BabiFoot],
    }
}

pub(crate) fn nathan() -> DoctoralStudent {
    DoctoralStudent {
        administration_id: "559151d".to_owned(),
        last_name: "Nathan".to_owned(),
        first_name: "D".to_owned(),
        classes_given: vec![Course::BabiFoot],
        salary: 2100,
    }
}

pub(crate) fn bob() -> Teacher {
    Teacher {
        administration_id: "452115d".to_owned(),
        last_name: "Bob".to_owned(),
        first_name: "SINCKLAR".to_owned(),
        classes_given: vec![Course::ComputerScience, Course::BabiFoot],
        salary: 3000,
    }
}

/// Sample fruits, in catalogue order.
pub(crate) fn fruits() -> Vec<(String, Fruit)> {
    [
        ("apple", "red", 100),
        ("grape", "red", 5),
        ("banana", "yellow", 183),
        ("lemon", "yellow", 80),
        ("pear", "green", 178),
        ("orange", "orange", 262),
        ("raspberry", "red", 4),
        ("cherry", "red", 5),
    ]
    .into_iter()
    .map(|(name, color, mass)| (name.to_owned(), Fruit { color, mass }))
    .collect()
}

/// Any academic kind in one registry, through trait objects.
pub(crate) fn everyone(name: &str) -> University<Box<dyn Academic>> {
    let mut university: University<Box<dyn Academic>> = University::new(name);
    university.add_academic(Box::new(robert()));
    university.add_academic(Box::new(nathan()));
    university.add_academic(Box::new(bob()));
    university
}

pub(crate) fn students(name: &str) -> University<AnyAcademic> {
    let mut university = University::new(name);
    university.extend([robert().into(), nathan().into()]);
    university
}

pub(crate) fn total_mass(fruits: &[(String, Fruit)]) -> u32 {
    reduce_dict(fruits.iter().map(|(k, v)| (k, v)), |mass, fruit, _| mass + fruit.mass, 0)
}

pub(crate) fn red_fruits(fruits: &[(String, Fruit)]) -> BTreeMap<String, Fruit> {
    filter_dict(fruits.iter().map(|(k, v)| (k, v)), |fruit, _| fruit.color == "red")
}

pub(crate) fn masses_in_kg(fruits: &[(String, Fruit)]) -> BTreeMap<String, f64> {
    map_dict(fruits.iter().map(|(k, v)| (k, v)), |fruit, _| f64::from(fruit.mass) * 0.001)
}

pub(crate) fn run(name: &str) -> Result<(), RegistryError> {
    let mut university = everyone(name);
    for academic in &university {
        info!(
            administration_id = academic.administration_id(),
            "{} {}",
            academic.first_name(),
            academic.last_name()
        );
    }

    let teacher = university.require_academic("452115d").context("looking up teacher")?;
    info!(last_name = teacher.last_name(), "Teacher is registered");

    university.remove_academic("452115d");
    if let Err(err) = university.require_academic("452115d") {
        warn!(%err, "Teacher left the university");
    }

    let enrolled = students(name);
    let payroll = enrolled
        .iter()
        .filter_map(|a| match a {
            AnyAcademic::DoctoralStudent(d) => Some(d.salary),
            AnyAcademic::Student(_) => None,
        })
        .sum::<u32>();
    info!(count = enrolled.len(), payroll, "Students enrolled");

    let fruits = fruits();
    info!(total = total_mass(&fruits), "One of each fruit");
    let red: Vec<String> = red_fruits(&fruits).into_keys().collect();
    info!(?red, "Red fruits");
    info!(kg = ?masses_in_kg(&fruits), "Fruit masses");

    Ok(())
}
