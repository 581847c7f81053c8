use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::rngs::OsRng;
use rp_application::prelude as flows;
use rp_core::{
    entities::*,
    repositories::ReviewFilter,
    usecases::{NewReview, RestrictionStatus},
};
use rp_db_sqlite::Connections;

use crate::config::Config;

#[derive(Parser)]
#[command(author, version, about = "Loyalty points for verified reviews")]
pub struct Cli {
    /// Configuration file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// URL to the database
    #[arg(long, global = true, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Issue a batch of review tokens for a place
    IssueTokens {
        #[arg(long)]
        place: String,
        #[arg(long, default_value_t = 20)]
        count: usize,
    },
    /// Issue new tokens if a place is running out of unused ones
    RefillTokens {
        #[arg(long)]
        place: String,
    },
    /// Redeem a review token
    SubmitReview {
        #[arg(long)]
        user: String,
        #[arg(long)]
        place: String,
        #[arg(long)]
        token: String,
        #[arg(long)]
        rating: RatingPrimitive,
        #[arg(long, default_value = "")]
        content: String,
    },
    /// Change the content and rating of an own review
    UpdateReview {
        #[arg(long)]
        user: String,
        #[arg(long)]
        review: String,
        #[arg(long)]
        rating: RatingPrimitive,
        #[arg(long, default_value = "")]
        content: String,
    },
    /// Delete an own review
    DeleteReview {
        #[arg(long)]
        user: String,
        #[arg(long)]
        review: String,
    },
    /// List the reviews of a place, most recent first
    Reviews {
        #[arg(long)]
        place: String,
        #[arg(long)]
        rating: Option<RatingPrimitive>,
        /// Unix timestamp in milliseconds (inclusive)
        #[arg(long)]
        since: Option<i64>,
        /// Unix timestamp in milliseconds (exclusive)
        #[arg(long)]
        until: Option<i64>,
        #[arg(long)]
        limit: Option<u64>,
    },
    /// Show the points balance of a user
    Points {
        #[arg(long)]
        user: String,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        config,
        db_url,
        command,
    } = cli;

    let mut cfg = Config::try_load_from_file_or_default(config)?;
    if let Some(db_url) = db_url {
        cfg.db.conn_sqlite = db_url;
    }

    let pool_size = cfg.db.pool_size();
    log::info!(
        "Connecting to SQLite database '{}' (pool size = {pool_size})",
        cfg.db.conn_sqlite
    );
    let connections = Connections::init(&cfg.db.conn_sqlite, pool_size)?;
    rp_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    let policy = cfg.policy;
    let now = Timestamp::now();
    let mut rng = OsRng;

    match command {
        Command::IssueTokens { place, count } => {
            let values = flows::issue_review_tokens(
                &connections,
                &mut rng,
                &policy.tokens,
                &place,
                count,
                now,
            )?;
            for value in values {
                println!("{value}");
            }
        }
        Command::RefillTokens { place } => {
            let place_id = Id::parse_uuid(&place)?;
            let refilled =
                flows::refill_review_tokens(&connections, &mut rng, &policy.tokens, &place_id, now)?;
            match refilled {
                Some(values) => {
                    for value in values {
                        println!("{value}");
                    }
                }
                None => log::info!("Place {place_id} has enough unused review tokens"),
            }
        }
        Command::SubmitReview {
            user,
            place,
            token,
            rating,
            content,
        } => {
            let new_review = NewReview {
                user_id: user.into(),
                place_id: place,
                content,
                rating: rating.into(),
                token,
            };
            let submitted = flows::submit_review(&connections, &mut rng, &policy, new_review, now)?;
            println!("{}", submitted.review.id);
            println!("points: +{}", submitted.awarded_points);
            match submitted.restriction {
                RestrictionStatus::Unrestricted => {}
                RestrictionStatus::Restricted => println!("points are frozen"),
                RestrictionStatus::Triggered(restriction) => {
                    println!("points are frozen until {}", restriction.expires_at)
                }
            }
        }
        Command::UpdateReview {
            user,
            review,
            rating,
            content,
        } => {
            let review = flows::update_review(
                &connections,
                &review.into(),
                &user.into(),
                content,
                rating.into(),
                now,
            )?;
            print_review(&review);
        }
        Command::DeleteReview { user, review } => {
            flows::delete_review(&connections, &review.into(), &user.into(), now)?;
        }
        Command::Reviews {
            place,
            rating,
            since,
            until,
            limit,
        } => {
            let filter = ReviewFilter {
                rating: rating.map(Into::into),
                created_since: since.map(Timestamp::from_millis),
                created_until: until.map(Timestamp::from_millis),
                limit,
            };
            for review in flows::load_reviews_of_place(&connections, &place, &filter)? {
                print_review(&review);
            }
        }
        Command::Points { user } => {
            println!("{}", flows::user_points(&connections, &user.into())?);
        }
    }
    Ok(())
}

fn print_review(review: &Review) {
    println!(
        "{}\t{}\t{}\t{}\t{}",
        review.id,
        review.created_at,
        review.user_id,
        RatingPrimitive::from(review.rating),
        review.content
    );
}
