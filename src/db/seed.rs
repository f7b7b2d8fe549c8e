use chrono::{DateTime, NaiveDate, Utc};

use crate::core::{KvStore, StoreError};
use crate::models::projects::{Project, ProjectStatus};

use super::{projects, DATA_INITIALIZED_KEY};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|d| d.and_utc())
        .unwrap_or_default()
}

fn unsplash(photo: &str) -> String {
    format!(
        "https://images.unsplash.com/photo-{}?w=800&h=600&fit=crop&q=80",
        photo
    )
}

fn ongoing(progress: u32, funds: &str, goal: &str) -> ProjectStatus {
    ProjectStatus::Ongoing {
        progress: Some(progress),
        funds: Some(funds.to_string()),
        goal: Some(goal.to_string()),
    }
}

fn completed(impact: &str, year: &str) -> ProjectStatus {
    ProjectStatus::Completed {
        impact: Some(impact.to_string()),
        year: Some(year.to_string()),
    }
}

pub fn sample_projects() -> Vec<Project> {
    let project = |id: &str,
                   title: &str,
                   description: &str,
                   status: ProjectStatus,
                   photos: &[&str],
                   created_at: DateTime<Utc>| Project {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        status,
        images: photos.iter().map(|p| unsplash(p)).collect(),
        created_at,
    };

    vec![
        project(
            "1",
            "Construction d'une école primaire",
            "Construction d'une nouvelle école primaire dans le village de Thiès pour accueillir 200 élèves. Le projet comprend 6 salles de classe, une bibliothèque et une cour de récréation.",
            ongoing(65, "45,000€", "70,000€"),
            &["1503676260728-1c00da094a0b", "1427504494785-3a9ca7044f45", "1509062522246-3755977927d7"],
            date(2024, 1, 15),
        ),
        project(
            "2",
            "Programme de nutrition maternelle",
            "Programme de soutien nutritionnel pour 150 mères et leurs enfants. Distribution de compléments alimentaires et sessions d'éducation sur la nutrition infantile.",
            ongoing(80, "28,000€", "35,000€"),
            &["1559027615-cd4628902d4a", "1631815588090-d4bfec5b1ccb"],
            date(2024, 2, 10),
        ),
        project(
            "3",
            "Distribution de fournitures scolaires",
            "Distribution de 500 kits scolaires comprenant cahiers, stylos, crayons et livres aux élèves de zones rurales défavorisées.",
            ongoing(40, "8,500€", "20,000€"),
            &["1488521787991-ed7bbaae773c", "1503676260728-1c00da094a0b"],
            date(2024, 3, 5),
        ),
        project(
            "4",
            "Rénovation de l'école de Dakar",
            "Rénovation complète de l'école primaire de Dakar incluant la réparation des toits, la peinture des murs et l'installation de nouvelles fenêtres. 350 élèves ont retrouvé un environnement d'apprentissage sain et sécurisé.",
            completed("350 élèves bénéficiaires", "2023"),
            &["1497633762265-9d179a990aa6", "1427504494785-3a9ca7044f45"],
            date(2023, 6, 20),
        ),
        project(
            "5",
            "Formation des enseignants",
            "Programme de formation continue pour 50 enseignants sur les méthodes pédagogiques modernes et l'utilisation des technologies éducatives.",
            completed("50 enseignants formés, 1200 élèves impactés", "2023"),
            &["1524178232363-1fb2b075b655", "1509062522246-3755977927d7"],
            date(2023, 9, 15),
        ),
        project(
            "6",
            "Jardin potager communautaire",
            "Création d'un jardin potager géré par les femmes de la communauté pour assurer l'autonomie alimentaire et générer des revenus. Formation à l'agriculture durable et aux techniques de permaculture.",
            completed("45 familles bénéficiaires, autonomie alimentaire renforcée", "2022"),
            &["1464226184884-fa280b87c399", "1530836369250-ef72a3f5cda8"],
            date(2022, 11, 10),
        ),
    ]
}

pub async fn seed_sample_projects(store: &KvStore) -> Result<(), StoreError> {
    projects::save_projects(store, &sample_projects()).await
}

/// Seeds the sample projects once, on the first start with an empty project
/// collection. Returns whether anything was written.
pub async fn initialize_data(store: &KvStore) -> Result<bool, StoreError> {
    if store.get_or(DATA_INITIALIZED_KEY, false).await? {
        return Ok(false);
    }

    let seeded = if projects::fetch_projects(store).await?.is_empty() {
        seed_sample_projects(store).await?;
        true
    } else {
        false
    };
    store.set(DATA_INITIALIZED_KEY, &true).await?;
    Ok(seeded)
}
