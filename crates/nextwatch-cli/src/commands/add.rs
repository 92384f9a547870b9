use chrono::{NaiveDate, Utc};
use clap::Args;
use color_eyre::Result;

use nextwatch_models::{Priority, WatchStatus, WatchlistItem};

use crate::commands::Workspace;
use crate::output::Output;

#[derive(Args)]
pub struct AddArgs {
    /// Title of the movie or show
    pub title: String,

    /// Item id; derived from the title when omitted
    #[arg(long)]
    pub id: Option<String>,

    /// Poster image URL
    #[arg(long, default_value = "")]
    pub poster_url: String,

    /// Backdrop image URL
    #[arg(long)]
    pub backdrop_url: Option<String>,

    /// Release date (YYYY-MM-DD); defaults to today
    #[arg(long, value_name = "DATE")]
    pub release_date: Option<NaiveDate>,

    /// Initial status: want-to-watch, watching, watched
    #[arg(long, default_value = "want-to-watch")]
    pub status: WatchStatus,

    /// Initial priority: high, medium, low
    #[arg(long, default_value = "medium")]
    pub priority: Priority,

    /// Rating on a 0-10 scale
    #[arg(long)]
    pub rating: Option<f32>,

    /// Genre (repeat for multiple; the first one drives genre grouping)
    #[arg(long = "genre", value_name = "GENRE")]
    pub genres: Vec<String>,

    /// Runtime in minutes
    #[arg(long)]
    pub runtime: Option<u32>,

    #[arg(long)]
    pub director: Option<String>,

    /// Streaming service (repeat for multiple)
    #[arg(long = "streaming-service", value_name = "SERVICE")]
    pub streaming_services: Vec<String>,
}

pub fn run_add(args: AddArgs, workspace: &Workspace, output: &Output) -> Result<()> {
    let mut controller = workspace.controller()?;

    let id = args.id.unwrap_or_else(|| slugify(&args.title));
    let now = Utc::now();
    let release_date = match args.release_date {
        Some(date) => date.and_time(chrono::NaiveTime::MIN).and_utc(),
        None => now,
    };

    let item = WatchlistItem {
        id: id.clone(),
        title: args.title.clone(),
        poster_url: args.poster_url,
        backdrop_url: args.backdrop_url,
        date_added: now,
        release_date,
        status: args.status,
        priority: args.priority,
        progress: None,
        rating: args.rating,
        genres: args.genres,
        runtime: args.runtime,
        director: args.director,
        streaming_services: if args.streaming_services.is_empty() {
            None
        } else {
            Some(args.streaming_services)
        },
    };

    controller.add(item)?;
    workspace.save(&controller)?;

    output.success(format!(
        "Added \"{}\" as {} ({} titles total)",
        args.title,
        id,
        controller.view().stats.total
    ));
    Ok(())
}

fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_dash = true;
    for c in title.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("The Long Goodbye"), "the-long-goodbye");
        assert_eq!(slugify("Mad Max: Fury Road"), "mad-max-fury-road");
        assert_eq!(slugify("  Heat  "), "heat");
    }
}
