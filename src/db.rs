use sqlx::MySqlPool;

pub async fn init_db(database_url: &str) -> MySqlPool {
    MySqlPool::connect(database_url)
        .await
        .expect("Failed to connect to database")
}

/// Creates the two portal tables on first start. There is deliberately no
/// foreign key between them: a request keeps its snapshot columns and may
/// outlive the directory row it was created from.
pub async fn ensure_schema(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS personnel (
            id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
            registration_no VARCHAR(32) NULL,
            full_name VARCHAR(255) NOT NULL,
            password VARCHAR(255) NOT NULL,
            job_title VARCHAR(255) NULL,
            department VARCHAR(255) NULL,
            email VARCHAR(255) NULL,
            approver_email VARCHAR(255) NULL,
            role VARCHAR(16) NOT NULL DEFAULT 'personnel',
            phone VARCHAR(32) NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS leave_requests (
            id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
            person_id BIGINT UNSIGNED NOT NULL,
            full_name VARCHAR(255) NOT NULL,
            department VARCHAR(255) NULL,
            job_title VARCHAR(255) NULL,
            leave_type VARCHAR(32) NOT NULL,
            start_date DATE NOT NULL,
            end_date DATE NOT NULL,
            reason TEXT NULL,
            status VARCHAR(16) NOT NULL DEFAULT 'pending',
            approval_note TEXT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
