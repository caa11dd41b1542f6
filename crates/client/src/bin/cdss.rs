use anyhow::Context;
use cdss_client::{Event, GuidelineClient, Outcome, Role, Session, Transcript};
use cdss_core::config;
use cdss_core::schema::{RecommendationRequest, RecommendationResponse};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cdss", about = "Clinical decision support client")]
struct Args {
    /// Backend base URL
    #[arg(long, env = "CDSS_BACKEND_URL", default_value = config::DEFAULT_BACKEND_URL)]
    backend_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = config::CLIENT_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Structured recommendation for a patient
    Recommend {
        #[arg(long)]
        patient_id: String,
        #[arg(long)]
        age: u32,
        #[arg(long)]
        gender: String,
        /// Symptom; repeat the flag or separate with commas
        #[arg(long = "symptom", required = true, value_delimiter = ',')]
        symptoms: Vec<String>,
    },
    /// Ask free-form questions about the guideline
    Chat {
        /// Maximum messages kept in the transcript
        #[arg(long, default_value_t = config::TRANSCRIPT_CAPACITY)]
        history: usize,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let client = GuidelineClient::new(&args.backend_url, Duration::from_secs(args.timeout_secs))
        .context("failed to build HTTP client")?;

    match args.command {
        Command::Recommend {
            patient_id,
            age,
            gender,
            symptoms,
        } => {
            let mut session = Session::new(client);
            let form = RecommendationRequest {
                patient_id,
                age,
                gender,
                symptoms: symptoms.iter().map(|s| s.trim().to_string()).collect(),
            };
            match session.handle(Event::SubmitForm(form)) {
                Outcome::Recommendation(resp) => print_recommendation(&resp),
                Outcome::Error(msg) => {
                    eprintln!("{msg}");
                    std::process::exit(1);
                }
                Outcome::Answer(_) | Outcome::Ignored => {}
            }
        }
        Command::Chat { history } => {
            let session = Session::with_transcript(client, Transcript::with_capacity(history));
            chat_loop(session, &args.backend_url)?;
        }
    }
    Ok(())
}

fn print_recommendation(resp: &RecommendationResponse) {
    println!("Patient:     {}", resp.patient_id);
    println!("Query:       {}", resp.query);
    println!();
    if resp.snippet.is_empty() {
        println!("No relevant guideline found.");
    } else {
        println!("{}", resp.snippet);
    }
    println!();
    println!("Explanation: {}", resp.explanation);
}

fn chat_loop(mut session: Session<GuidelineClient>, backend_url: &str) -> anyhow::Result<()> {
    println!("Ask questions about the guideline ({backend_url}). /history shows the transcript, /quit exits.");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("> ");
        stdout.flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match line.trim() {
            "/quit" | "/exit" => break,
            "/history" => {
                for msg in session.transcript().iter() {
                    let who = match msg.role {
                        Role::User => "you",
                        Role::Assistant => "guideline",
                    };
                    println!("[{who}] {}", msg.content);
                }
                continue;
            }
            _ => {}
        }
        match session.handle(Event::SendChat(line.clone())) {
            Outcome::Answer(answer) if answer.is_empty() => println!("No relevant guideline found."),
            Outcome::Answer(answer) => println!("{answer}"),
            Outcome::Error(msg) => eprintln!("{msg}"),
            Outcome::Recommendation(_) | Outcome::Ignored => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_symptoms(argv: &[&str]) -> Vec<String> {
        let args = Args::try_parse_from(argv).unwrap();
        match args.command {
            Command::Recommend { symptoms, .. } => symptoms,
            Command::Chat { .. } => panic!("expected recommend"),
        }
    }

    #[test]
    fn test_comma_separated_symptoms_split() {
        let symptoms = parse_symptoms(&[
            "cdss",
            "recommend",
            "--patient-id",
            "p1",
            "--age",
            "67",
            "--gender",
            "Female",
            "--symptom",
            "shortness of breath, swelling",
        ]);
        let trimmed: Vec<&str> = symptoms.iter().map(|s| s.trim()).collect();
        assert_eq!(trimmed, vec!["shortness of breath", "swelling"]);
    }

    #[test]
    fn test_repeated_symptom_flags() {
        let symptoms = parse_symptoms(&[
            "cdss", "recommend", "--patient-id", "p1", "--age", "67", "--gender", "Male",
            "--symptom", "fatigue", "--symptom", "oedema",
        ]);
        assert_eq!(symptoms, vec!["fatigue", "oedema"]);
    }

    #[test]
    fn test_symptom_required() {
        assert!(Args::try_parse_from([
            "cdss", "recommend", "--patient-id", "p1", "--age", "67", "--gender", "Male",
        ])
        .is_err());
    }
}
