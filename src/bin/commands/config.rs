use clap::Args;
use escola::database::{
    CourseRepository, EnrollmentRepository, SchemaManager, SchemaStatus, StudentRepository,
};
use escola::{DatabaseConn, SchoolConfig};
use serde::Serialize;
use std::path::Path;

/// Arguments for the Config command
#[derive(Args)]
pub struct ConfigArgs {
    /// Print the configuration as JSON
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ConfigInfo {
    config_file: String,
    #[serde(flatten)]
    config: SchoolConfig,
    database: DatabaseInfo,
}

#[derive(Debug, Serialize)]
struct DatabaseInfo {
    path: String,
    exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    size_bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    schema_version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    counts: Option<RecordCounts>,
}

#[derive(Debug, Serialize)]
struct RecordCounts {
    courses: u64,
    students: u64,
    enrollments: u64,
}

fn record_counts(db: &DatabaseConn) -> Option<RecordCounts> {
    Some(RecordCounts {
        courses: CourseRepository::new(&db.conn).count().ok()?,
        students: StudentRepository::new(&db.conn).count().ok()?,
        enrollments: EnrollmentRepository::new(&db.conn).count().ok()?,
    })
}

fn database_info(config: &SchoolConfig) -> DatabaseInfo {
    let path = config.sqlite_path();
    let exists = Path::new(&path).exists();
    let size_bytes = std::fs::metadata(&path).ok().map(|m| m.len());

    // Only peek at an existing file; opening would create it.
    let db = if exists {
        DatabaseConn::open_path(&path).ok()
    } else {
        None
    };
    let status = db
        .as_ref()
        .and_then(|db| SchemaManager::new(&db.conn).check_status().ok());

    let schema_version = match (&db, &status) {
        (Some(db), Some(s)) if *s != SchemaStatus::NotInitialized => {
            SchemaManager::new(&db.conn).get_schema_version().ok()
        }
        _ => None,
    };
    // Tables of an older schema version may not match the current queries.
    let counts = match (&db, status) {
        (Some(db), Some(SchemaStatus::Current)) => record_counts(db),
        _ => None,
    };

    DatabaseInfo {
        path,
        exists,
        size_bytes,
        schema_version,
        counts,
    }
}

pub fn run(config: &SchoolConfig, args: ConfigArgs) -> anyhow::Result<()> {
    let ConfigArgs { json } = args;

    let info = ConfigInfo {
        config_file: SchoolConfig::config_file_path(),
        config: config.clone(),
        database: database_info(config),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Config File:        {}", info.config_file);
    println!("{}", config.summary());
    println!(
        "Database:           {}",
        if info.database.exists {
            "present"
        } else {
            "not created yet"
        }
    );
    if let Some(size) = info.database.size_bytes {
        println!("Database Size:      {} bytes", size);
    }
    if let Some(version) = info.database.schema_version {
        println!("Schema Version:     {}", version);
    }
    if let Some(counts) = &info.database.counts {
        println!("Courses:            {}", counts.courses);
        println!("Students:           {}", counts.students);
        println!("Enrollments:        {}", counts.enrollments);
    }

    Ok(())
}
