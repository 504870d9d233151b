use clap::{Parser, Subcommand};
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::adapters::StatsProvider;
use crate::domain::{PlayerProfile, SuggestionRecord};
use crate::error::{PropError, Result};
use crate::strategy::{PlayerAnalysis, SuggestionEngine};

#[derive(Parser)]
#[command(name = "propline")]
#[command(version = "0.1.0")]
#[command(about = "NBA player prop suggestions with confidence scoring", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config directory
    #[arg(short, long, global = true, default_value = "config")]
    pub config: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API (default)
    Serve {
        /// Port override
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// List available players
    Players {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show suggestions for one player
    Suggest {
        /// Player ID
        id: u32,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Output mode for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Table,
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputMode::Json
        } else {
            OutputMode::Table
        }
    }
}

#[derive(Tabled)]
struct PlayerRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "Pos")]
    position: String,
}

impl From<&PlayerProfile> for PlayerRow {
    fn from(p: &PlayerProfile) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            team: p.team.clone(),
            position: p.position.clone(),
        }
    }
}

#[derive(Tabled)]
struct SuggestionRow {
    #[tabled(rename = "Market")]
    market: String,
    #[tabled(rename = "Line")]
    suggestion: String,
    #[tabled(rename = "Conf")]
    confidence: String,
    #[tabled(rename = "Odds")]
    odds: String,
    #[tabled(rename = "Strength")]
    strength: String,
    #[tabled(rename = "Notes")]
    description: String,
}

impl From<&SuggestionRecord> for SuggestionRow {
    fn from(s: &SuggestionRecord) -> Self {
        Self {
            market: s.market.clone(),
            suggestion: s.suggestion.clone(),
            confidence: format!("{}%", s.confidence),
            odds: s.odds.clone(),
            strength: s.strength.to_string(),
            description: s.description.clone(),
        }
    }
}

fn print_json<T: Serialize>(item: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(item)?);
    Ok(())
}

/// `propline players`
pub async fn list_players(provider: &dyn StatsProvider, mode: OutputMode) -> Result<()> {
    let players = provider.players().await?;

    match mode {
        OutputMode::Json => print_json(&players)?,
        OutputMode::Table => {
            if players.is_empty() {
                println!("(no results)");
            } else {
                let rows: Vec<PlayerRow> = players.iter().map(PlayerRow::from).collect();
                println!("{}", Table::new(rows));
                println!("Source: {}", provider.source());
            }
        }
    }
    Ok(())
}

/// `propline suggest <id>`
pub async fn show_suggestions(
    provider: &dyn StatsProvider,
    engine: &SuggestionEngine,
    id: u32,
    mode: OutputMode,
) -> Result<()> {
    let record = provider
        .player(id)
        .await?
        .ok_or(PropError::PlayerNotFound(id))?;
    let analysis = engine.analyze(&record);

    match mode {
        OutputMode::Json => print_json(&analysis)?,
        OutputMode::Table => print_analysis(&analysis),
    }
    Ok(())
}

fn print_analysis(analysis: &PlayerAnalysis) {
    let player = &analysis.player;
    let stats = &analysis.stats;

    println!("{} ({}, {})", player.name, player.team, player.position);
    println!(
        "PTS {:.1} | AST {:.1} | REB {:.1} | 3PM {:.1}",
        stats.points, stats.assists, stats.rebounds, stats.threes
    );
    println!("Recent points: {:?} (trend: {})", analysis.recent_games, analysis.trend);
    println!();

    if analysis.suggestions.is_empty() {
        println!("(no eligible markets)");
        return;
    }

    let rows: Vec<SuggestionRow> = analysis.suggestions.iter().map(SuggestionRow::from).collect();
    println!("{}", Table::new(rows));
}
