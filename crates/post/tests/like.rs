use devconnect_shared::Error;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn like_twice_is_rejected() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let cmd = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let id = helpers::create_post(&cmd, "u1", "hello").await?;

    let likes = cmd.like("u2", &id).await?;
    assert_eq!(likes.len(), 1);

    let again = cmd.like("u2", &id).await;
    assert!(
        matches!(again, Err(Error::Rejected(msg)) if msg == "Post already liked by the user")
    );
    assert_eq!(cmd.get(&id).await?.likes.len(), 1);

    Ok(())
}

#[tokio::test]
async fn likes_are_newest_first() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let cmd = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let id = helpers::create_post(&cmd, "u1", "hello").await?;

    cmd.like("u1", &id).await?;
    cmd.like("u2", &id).await?;
    let likes = cmd.like("u3", &id).await?;

    let users: Vec<&str> = likes.iter().map(|l| l.user.as_str()).collect();
    assert_eq!(users, vec!["u3", "u2", "u1"]);

    Ok(())
}

#[tokio::test]
async fn unlike_requires_a_previous_like() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let cmd = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let id = helpers::create_post(&cmd, "u1", "hello").await?;

    let never = cmd.unlike("u2", &id).await;
    assert!(matches!(never, Err(Error::Rejected(msg)) if msg == "User has not liked the post"));

    cmd.like("u2", &id).await?;
    cmd.like("u3", &id).await?;
    let likes = cmd.unlike("u2", &id).await?;
    assert_eq!(likes.len(), 1);
    assert_eq!(likes[0].user, "u3");

    Ok(())
}

#[tokio::test]
async fn like_unknown_post_is_not_found() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let cmd = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    assert!(matches!(cmd.like("u1", "missing").await, Err(Error::NotFound(_))));
    assert!(matches!(cmd.unlike("u1", "missing").await, Err(Error::NotFound(_))));

    Ok(())
}

#[tokio::test]
async fn concurrent_likes_never_duplicate() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let cmd = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let id = helpers::create_post(&cmd, "u1", "hello").await?;

    let mut handles = vec![];
    for _ in 0..8 {
        let cmd = cmd.clone();
        let id = id.clone();
        handles.push(tokio::spawn(async move { cmd.like("u2", &id).await }));
    }

    let mut succeeded = 0;
    for handle in handles {
        if handle.await?.is_ok() {
            succeeded += 1;
        }
    }

    assert_eq!(succeeded, 1);
    assert_eq!(cmd.get(&id).await?.likes.len(), 1);

    Ok(())
}
