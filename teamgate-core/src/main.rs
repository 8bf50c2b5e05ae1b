use anyhow::Result;
use clap::{Parser, Subcommand};
use teamgate_core::clock::{Clock, SystemClock};
use teamgate_core::config::Config;
use teamgate_core::domain::{EntityId, InvitationLink, InvitationPayload, SignupRequest};
use teamgate_core::policy::invitation;
use tracing::info;

#[derive(Parser)]
#[command(name = "teamgate", about = "Issue and verify signed team invitation links")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a signed signup link for a team
    Issue {
        #[arg(long)]
        team_id: EntityId,
        #[arg(long)]
        team_name: String,
        #[arg(long)]
        display_name: String,
        #[arg(long)]
        email: String,
        /// Team invite id to append as `iid`
        #[arg(long)]
        invite_id: Option<EntityId>,
    },
    /// Check a signed signup link against the configured salt, the signup
    /// switches and the domain allow-list. The team store is not consulted.
    Verify {
        #[arg(long)]
        link: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    teamgate_core::telemetry::init(&config.telemetry);

    let now_ms = SystemClock.now_ms();

    match cli.command {
        Command::Issue {
            team_id,
            team_name,
            display_name,
            email,
            invite_id,
        } => {
            let payload = InvitationPayload {
                team_id: team_id.to_string(),
                team_name: Some(team_name),
                display_name,
                email,
                time_ms: now_ms,
            };
            let signed = invitation::issue(&payload, &config.signup.invite_salt);
            let link = InvitationLink::build(
                &config.signup_base_url,
                &signed.payload,
                &signed.signature,
                invite_id.as_ref(),
            )?;
            info!(team_id = %team_id, "Issued signup link");
            println!("{}", link);
        }
        Command::Verify { link } => {
            let request = SignupRequest::from_link(&link)?;
            let payload = invitation::verify_request(&request, &config.signup, now_ms)?;

            println!("team_id:      {}", payload.team_id);
            if let Some(name) = &payload.team_name {
                println!("team_name:    {}", name);
            }
            println!("display_name: {}", payload.display_name);
            println!("email:        {}", payload.email);
            println!(
                "expires_in:   {}s",
                (payload.time_ms + invitation::INVITATION_VALIDITY_MS - now_ms) / 1000
            );
        }
    }

    Ok(())
}
