//! `tb-admin`: manage TightBlog planets and weblog members from a terminal.

use std::process::ExitCode;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tightblog_admin::models::WeblogRole;
use tightblog_admin::views::{
    MemberRoleController, Outcome, PlanetListView, RecordingNavigator,
};
use tightblog_admin::{AdminClient, ClientError, Config};

const USAGE: &str = "usage: tb-admin <command>

commands:
  planets                    list planets
  delete-planet <id>         delete a planet after confirmation
  members                    list weblog members and users who can be added
  set-role <user> <role>     change a member's role
  remove-member <user>       drop a member from the weblog
  add-member <user> <role>   add a user to the weblog
  invite <user> <role>       invite a user to the weblog

roles: OWNER, POST, EDIT_DRAFT";

/// A parsed command line.
#[derive(Debug, PartialEq)]
enum Command {
    Planets,
    DeletePlanet(String),
    Members,
    SetRole(String, WeblogRole),
    RemoveMember(String),
    AddMember(String, WeblogRole),
    Invite(String, WeblogRole),
}

impl Command {
    fn parse(args: &[String]) -> Result<Self, String> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        match args.as_slice() {
            ["planets"] => Ok(Command::Planets),
            ["delete-planet", id] => Ok(Command::DeletePlanet(id.to_string())),
            ["members"] => Ok(Command::Members),
            ["set-role", user, role] => Ok(Command::SetRole(user.to_string(), parse_role(role)?)),
            ["remove-member", user] => Ok(Command::RemoveMember(user.to_string())),
            ["add-member", user, role] => {
                Ok(Command::AddMember(user.to_string(), parse_role(role)?))
            }
            ["invite", user, role] => Ok(Command::Invite(user.to_string(), parse_role(role)?)),
            _ => Err(USAGE.to_string()),
        }
    }
}

fn parse_role(role: &str) -> Result<WeblogRole, String> {
    WeblogRole::from_str(role).ok_or_else(|| format!("unknown role {}\n\n{}", role, USAGE))
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(usage) => {
            eprintln!("{}", usage);
            return ExitCode::from(2);
        }
    };

    tracing::debug!("Server: {}", config.base_url);

    match run(command, &config).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, config: &Config) -> Result<ExitCode, ClientError> {
    let client = AdminClient::from_config(config)?;

    match command {
        Command::Planets => {
            let mut view = PlanetListView::new(client, config.labels.clone());
            view.load_planets().await?;
            print_planets(&view);
            Ok(ExitCode::SUCCESS)
        }
        Command::DeletePlanet(id) => {
            let mut view = PlanetListView::new(client, config.labels.clone());
            view.load_planets().await?;
            if !view.request_delete(&id) {
                eprintln!("no planet with id {}", id);
                return Ok(ExitCode::FAILURE);
            }
            if confirm(&view).await {
                view.confirm_delete().await?;
                print_planets(&view);
            } else {
                view.cancel_delete();
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Members => {
            let mut controller = members_controller(client, config)?;
            controller.load_members().await?;
            print_members(&controller);
            Ok(ExitCode::SUCCESS)
        }
        Command::SetRole(user, role) => {
            let mut controller = members_controller(client, config)?;
            controller.load_members().await?;
            if !controller.set_role(&user, role) {
                eprintln!("{} is not a member", user);
                return Ok(ExitCode::FAILURE);
            }
            let outcome = controller.update_roles().await;
            Ok(report(outcome, &controller))
        }
        Command::RemoveMember(user) => {
            let mut controller = members_controller(client, config)?;
            controller.load_members().await?;
            if !controller.remove_member(&user) {
                eprintln!("{} is not a member", user);
                return Ok(ExitCode::FAILURE);
            }
            let outcome = controller.update_roles().await;
            Ok(report(outcome, &controller))
        }
        Command::AddMember(user, role) => {
            let mut controller = members_controller(client, config)?;
            controller.user_to_add = Some(user);
            controller.user_to_add_role = Some(role);
            let outcome = controller.add_user_to_weblog().await;
            Ok(report(outcome, &controller))
        }
        Command::Invite(user, role) => {
            let mut controller = members_controller(client, config)?;
            controller.user_to_add = Some(user);
            controller.user_to_add_role = Some(role);
            let outcome = controller.invite_user_to_weblog().await;
            Ok(report(outcome, &controller))
        }
    }
}

fn members_controller(
    client: AdminClient,
    config: &Config,
) -> Result<MemberRoleController<RecordingNavigator>, ClientError> {
    let weblog_id = config
        .weblog_id
        .clone()
        .ok_or_else(|| ClientError::Config("TB_WEBLOG_ID is not set".to_string()))?;
    Ok(MemberRoleController::new(
        client,
        weblog_id,
        config.refresh_url.clone(),
        RecordingNavigator::default(),
    ))
}

/// Ask on stdin, playing the part of the confirmation dialog.
async fn confirm(view: &PlanetListView) -> bool {
    let dialog = view.dialog();
    eprint!(
        "Delete \"{}\"? [{} = y / {} = n] ",
        dialog.title(),
        dialog.labels.confirm,
        dialog.labels.cancel
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    match lines.next_line().await {
        Ok(Some(answer)) => matches!(answer.trim(), "y" | "Y" | "yes"),
        _ => false,
    }
}

fn print_planets(view: &PlanetListView) {
    for row in view.rows() {
        let marker = if row.altrow { '*' } else { ' ' };
        println!("{} {:<24} {:<16} {}", marker, row.id, row.handle, row.title);
    }
}

fn print_members(controller: &MemberRoleController<RecordingNavigator>) {
    println!("members of {}:", controller.weblog_id());
    for (user, role) in controller.roles() {
        println!("  {:<24} {}", user, role);
    }
    println!("can be added:");
    for (user, label) in controller.potential_members() {
        let default = if controller.user_to_add.as_deref() == Some(user) {
            " (default)"
        } else {
            ""
        };
        println!("  {:<24} {}{}", user, label, default);
    }
}

fn report(outcome: Outcome, controller: &MemberRoleController<RecordingNavigator>) -> ExitCode {
    match outcome {
        Outcome::Saved => {
            if let Some(message) = controller.success_message() {
                println!("{}", message);
            }
            print_members(controller);
            ExitCode::SUCCESS
        }
        Outcome::Skipped => {
            eprintln!("nothing to do");
            ExitCode::SUCCESS
        }
        Outcome::SessionExpired => {
            let location = controller.navigator().last().unwrap_or_default();
            eprintln!("session expired; log in again at {}", location);
            ExitCode::FAILURE
        }
        Outcome::Rejected => {
            if let Some(payload) = controller.error_obj() {
                eprintln!("rejected: {}", payload);
            }
            ExitCode::FAILURE
        }
        Outcome::Failed(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse(&args(&["planets"])), Ok(Command::Planets));
        assert_eq!(
            Command::parse(&args(&["delete-planet", "p1"])),
            Ok(Command::DeletePlanet("p1".to_string()))
        );
        assert_eq!(
            Command::parse(&args(&["add-member", "bob", "post"])),
            Ok(Command::AddMember("bob".to_string(), WeblogRole::Post))
        );
        assert_eq!(
            Command::parse(&args(&["remove-member", "bob"])),
            Ok(Command::RemoveMember("bob".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Command::parse(&args(&[])).is_err());
        assert!(Command::parse(&args(&["planets", "extra"])).is_err());
        assert!(Command::parse(&args(&["invite", "bob", "ADMIN"])).is_err());
    }
}
