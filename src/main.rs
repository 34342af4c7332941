use std::io::{self, Write};

use course_forms_core::app::FormController;
use course_forms_core::client::request::NoWasmClient;
use course_forms_core::config::{ApiConfig, DEFAULT_BASE_URL};
use course_forms_core::error::{ErrorKind, Result};
use course_forms_core::interface::HttpClient;
use course_forms_core::model::dtos::CourseFields;
use course_forms_core::view::ConsoleView;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        println!("usage: {} <username> <password> [base-url]", args[0]);
        println!("       base url falls back to COURSE_API_URL, then {DEFAULT_BASE_URL}");
        return Ok(());
    }

    let config = match args.get(3) {
        Some(url) => ApiConfig::new(url.clone()),
        None => ApiConfig::from_env(),
    };

    let api = NoWasmClient::new(config).await?;
    let controller = FormController::new(api, ConsoleView::new());

    controller.login(&args[1], &args[2]).await;
    if !controller.session().is_authenticated() {
        return Err(ErrorKind::SessionError("login did not produce a token".to_string()).into());
    }

    match controller.verify_session().await {
        Ok(identity) => println!("Logged in as {} ({})", identity.username, identity.role),
        Err(e) => println!("Session check failed: {e}"),
    }

    print_help();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let mut words = line.split_whitespace();
        match words.next() {
            Some("list") => controller.refresh_course_list().await,
            Some("show") => match words.next() {
                Some(id) => controller.show_course(id).await,
                None => println!("show <course-id>"),
            },
            Some("add") => {
                let fields = prompt_course_fields()?;
                controller.create_course(fields).await;
            }
            Some("update") => match words.next() {
                Some(id) => {
                    let id = id.to_string();
                    let fields = prompt_course_fields()?;
                    controller.update_course(&id, fields).await;
                }
                None => println!("update <course-id>"),
            },
            Some("remove") => match words.next() {
                Some(id) => controller.delete_course(id).await,
                None => println!("remove <course-id>"),
            },
            Some("register") => {
                let username = prompt("username")?;
                let password = prompt("password")?;
                let role = prompt("role (admin/editor/viewer/user)")?;
                controller.register(&username, &password, &role).await;
            }
            Some("whoami") => match controller.verify_session().await {
                Ok(identity) => println!("{} ({})", identity.username, identity.role),
                Err(e) => println!("session check failed: {e}"),
            },
            Some("help") => print_help(),
            Some("quit") | Some("exit") => break,
            Some(other) => println!("unknown command: {other}"),
            None => {}
        }
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_course_fields() -> Result<CourseFields> {
    Ok(CourseFields {
        title: prompt("title")?,
        description: prompt("description")?,
        instructor: prompt("instructor")?,
        duration: prompt("duration (hours)")?.parse().unwrap_or_default(),
        enrollment_limit: prompt("enrollment limit")?.parse().unwrap_or_default(),
    })
}

fn print_help() {
    println!("commands: list | show <id> | add | update <id> | remove <id> | register | whoami | help | quit");
}
