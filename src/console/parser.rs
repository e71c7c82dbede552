// src/console/parser.rs

use chrono::NaiveDate;

use crate::engine::FrontDeskEvent;
use crate::errors::{FrontDeskError, Result};
use crate::registry::{Desk, NewCollaborator, NewPatient};
use crate::types::{CollaboratorId, PatientId, Profile};

pub const HELP: &str = "\
commands:
  ticket | priority                      walk-up ticket (normal / priority)
  kiosk <cpf>                            ticket for a registered patient
  call [desk]                            call the next ticket to a desk
  next                                   call (or finish) at your own desk
  finish [desk]                          finish the current service
  desk add <name> <attendant...>         register a desk
  desk rm <name>                         remove a desk
  patient add <first> <last> <cpf> <YYYY-MM-DD>
  patient rm <id>
  staff add <first> <last> <registration> <profile> [password]
  staff rm <id>
  login <user> <password> | logout
  status | help | quit
names with spaces can be quoted: desk add \"Guiche 1\" Joao Silva";

/// What a single console line asks for.
#[derive(Debug, Clone)]
pub enum ConsoleLine {
    Event(FrontDeskEvent),
    Help,
    Blank,
}

/// Split a line into words, keeping double-quoted runs together.
///
/// An unterminated quote runs to the end of the line.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }
    if has_token {
        tokens.push(current);
    }
    tokens
}

/// Parse one console line.
pub fn parse_line(line: &str) -> Result<ConsoleLine> {
    let tokens = tokenize(line);
    let Some((command, args)) = tokens.split_first() else {
        return Ok(ConsoleLine::Blank);
    };

    let event = match command.to_lowercase().as_str() {
        "help" | "?" => return Ok(ConsoleLine::Help),
        "ticket" => {
            expect_no_args(command, args)?;
            FrontDeskEvent::IssueTicket { priority: false }
        }
        "priority" => {
            expect_no_args(command, args)?;
            FrontDeskEvent::IssueTicket { priority: true }
        }
        "kiosk" => FrontDeskEvent::IssueForCpf {
            cpf: single_arg(command, args, "<cpf>")?,
        },
        "call" => FrontDeskEvent::CallNext {
            desk: optional_rest(args),
        },
        "next" => {
            expect_no_args(command, args)?;
            FrontDeskEvent::CallNext { desk: None }
        }
        "finish" => FrontDeskEvent::FinishServing {
            desk: optional_rest(args),
        },
        "desk" => parse_desk(args)?,
        "patient" => parse_patient(args)?,
        "staff" => parse_staff(args)?,
        "login" => match args {
            [user, password] => FrontDeskEvent::Login {
                user: user.clone(),
                password: password.clone(),
            },
            _ => return Err(usage("login <user> <password>")),
        },
        "logout" => FrontDeskEvent::Logout,
        "status" => FrontDeskEvent::ShowStatus,
        "quit" | "exit" => FrontDeskEvent::ShutdownRequested,
        other => {
            return Err(FrontDeskError::InvalidCommand(format!(
                "unknown command '{other}' (try `help`)"
            )));
        }
    };

    Ok(ConsoleLine::Event(event))
}

fn parse_desk(args: &[String]) -> Result<FrontDeskEvent> {
    match args {
        [sub, name, attendant @ ..] if sub == "add" && !attendant.is_empty() => {
            Ok(FrontDeskEvent::AddDesk(Desk::new(name.clone(), attendant.join(" "))))
        }
        [sub, name @ ..] if is_remove(sub) && !name.is_empty() => Ok(FrontDeskEvent::RemoveDesk {
            name: name.join(" "),
        }),
        _ => Err(usage("desk add <name> <attendant...> | desk rm <name>")),
    }
}

fn parse_patient(args: &[String]) -> Result<FrontDeskEvent> {
    match args {
        [sub, first, last, cpf, dob] if sub == "add" => {
            let dob = NaiveDate::parse_from_str(dob, "%Y-%m-%d").map_err(|e| {
                FrontDeskError::InvalidCommand(format!("invalid date of birth '{dob}': {e}"))
            })?;
            Ok(FrontDeskEvent::AddPatient(NewPatient {
                first_name: first.clone(),
                last_name: last.clone(),
                cpf: cpf.clone(),
                dob,
            }))
        }
        [sub, id] if is_remove(sub) => Ok(FrontDeskEvent::RemovePatient {
            id: PatientId(parse_id(id)?),
        }),
        _ => Err(usage("patient add <first> <last> <cpf> <YYYY-MM-DD> | patient rm <id>")),
    }
}

fn parse_staff(args: &[String]) -> Result<FrontDeskEvent> {
    match args {
        [sub, first, last, registration, profile, rest @ ..] if sub == "add" && rest.len() <= 1 => {
            let profile: Profile = profile.parse().map_err(FrontDeskError::InvalidCommand)?;
            Ok(FrontDeskEvent::AddCollaborator(NewCollaborator {
                first_name: first.clone(),
                last_name: last.clone(),
                registration: registration.clone(),
                profile,
                password: rest.first().cloned(),
            }))
        }
        [sub, id] if is_remove(sub) => Ok(FrontDeskEvent::RemoveCollaborator {
            id: CollaboratorId(parse_id(id)?),
        }),
        _ => Err(usage(
            "staff add <first> <last> <registration> <profile> [password] | staff rm <id>",
        )),
    }
}

fn is_remove(sub: &str) -> bool {
    matches!(sub, "rm" | "remove" | "del")
}

fn parse_id(raw: &str) -> Result<u64> {
    raw.parse()
        .map_err(|_| FrontDeskError::InvalidCommand(format!("'{raw}' is not a valid id")))
}

fn optional_rest(args: &[String]) -> Option<String> {
    if args.is_empty() {
        None
    } else {
        Some(args.join(" "))
    }
}

fn single_arg(command: &str, args: &[String], placeholder: &str) -> Result<String> {
    match args {
        [one] => Ok(one.clone()),
        _ => Err(usage(&format!("{command} {placeholder}"))),
    }
}

fn expect_no_args(command: &str, args: &[String]) -> Result<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(usage(command))
    }
}

fn usage(text: &str) -> FrontDeskError {
    FrontDeskError::InvalidCommand(format!("usage: {text}"))
}
