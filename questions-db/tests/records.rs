use questions_db::schema::create_schema;
use questions_db::*;
use rusqlite::Connection;

fn store_with_question() -> (Store, User, Question) {
    let store = Store::open_memory().unwrap();
    let mut user = User::new("Ada", "Lovelace");
    user.save(&store).unwrap();
    let mut question = Question::new("Why?", "Because.", user.id().unwrap());
    question.save(&store).unwrap();
    (store, user, question)
}

#[test]
fn save_assigns_identity_and_round_trips() {
    let store = Store::open_memory().unwrap();
    let mut user = User::new("Ada", "Lovelace");
    assert_eq!(user.id(), None);

    let id = user.save(&store).unwrap();
    assert_eq!(user.id(), Some(id));

    let loaded = User::find_by_id(&store, id).unwrap();
    assert_eq!(loaded, user);
    assert_eq!(loaded.fname, "Ada");
    assert_eq!(loaded.lname, "Lovelace");
}

#[test]
fn every_entity_round_trips() {
    let (store, user, question) = store_with_question();
    let uid = user.id().unwrap();
    let qid = question.id().unwrap();

    assert_eq!(Question::find_by_id(&store, qid).unwrap(), question);

    let mut top = Reply::new("First!", qid, uid);
    top.save(&store).unwrap();
    let mut nested = Reply::child_of(&top, "Second.", uid).unwrap();
    nested.save(&store).unwrap();
    assert_eq!(Reply::find_by_id(&store, top.id().unwrap()).unwrap(), top);
    let loaded = Reply::find_by_id(&store, nested.id().unwrap()).unwrap();
    assert_eq!(loaded, nested);
    assert_eq!(loaded.parent_id, top.id());
    assert_eq!(loaded.question_id, qid);

    let mut follow = QuestionFollow::new(qid, uid);
    follow.save(&store).unwrap();
    assert_eq!(QuestionFollow::find_by_id(&store, follow.id().unwrap()).unwrap(), follow);

    let mut like = QuestionLike::new(qid, uid);
    like.save(&store).unwrap();
    assert_eq!(QuestionLike::find_by_id(&store, like.id().unwrap()).unwrap(), like);
}

#[test]
fn find_by_id_is_repeatable() {
    let (store, _, question) = store_with_question();
    let id = question.id().unwrap();
    let first = Question::find_by_id(&store, id).unwrap();
    let second = Question::find_by_id(&store, id).unwrap();
    assert_eq!(first, second);
}

#[test]
fn find_by_id_reports_not_found() {
    let store = Store::open_memory().unwrap();
    let err = User::find_by_id(&store, 42).unwrap_err();
    assert!(
        matches!(err, RecordError::NotFound { entity: "User", id: 42 }),
        "unexpected error: {err}"
    );
}

#[test]
fn double_save_is_rejected_for_every_entity() {
    fn assert_rejected<T: Record>(store: &Store, mut record: T) {
        let id = record.save(store).unwrap();
        let err = record.save(store).unwrap_err();
        match err {
            RecordError::AlreadyPersisted { entity, id: got } => {
                assert_eq!(entity, T::ENTITY);
                assert_eq!(got, id);
            }
            other => panic!("expected AlreadyPersisted for {}, got {other}", T::ENTITY),
        }
        assert_eq!(T::all(store).unwrap().len(), 1, "{} duplicated", T::ENTITY);
    }

    let store = Store::open_memory().unwrap();
    assert_rejected(&store, User::new("Ada", "Lovelace"));
    assert_rejected(&store, Question::new("Title", "Body", 1));
    assert_rejected(&store, Reply::new("Body", 1, 1));
    assert_rejected(&store, QuestionFollow::new(1, 1));
    assert_rejected(&store, QuestionLike::new(1, 1));
}

#[test]
fn update_requires_identity_for_every_entity() {
    fn assert_not_persisted<T: Record>(store: &Store, record: T) {
        let err = record.update(store).unwrap_err();
        assert!(
            matches!(err, RecordError::NotPersisted { entity } if entity == T::ENTITY),
            "unexpected error for {}: {err}",
            T::ENTITY
        );
    }

    let store = Store::open_memory().unwrap();
    assert_not_persisted(&store, User::new("Ada", "Lovelace"));
    assert_not_persisted(&store, Question::new("Title", "Body", 1));
    assert_not_persisted(&store, Reply::new("Body", 1, 1));
    assert_not_persisted(&store, QuestionFollow::new(1, 1));
    assert_not_persisted(&store, QuestionLike::new(1, 1));
}

#[test]
fn update_changes_only_the_assigned_field() {
    let (store, user, question) = store_with_question();
    let id = question.id().unwrap();

    let mut loaded = Question::find_by_id(&store, id).unwrap();
    loaded.title = "Why not?".to_string();
    loaded.update(&store).unwrap();

    let reloaded = Question::find_by_id(&store, id).unwrap();
    assert_eq!(reloaded.title, "Why not?");
    assert_eq!(reloaded.body, "Because.");
    assert_eq!(reloaded.user_id, user.id().unwrap());
    assert_eq!(reloaded.id(), Some(id));
}

#[test]
fn update_round_trips_user_fields() {
    let (store, user, _) = store_with_question();
    let id = user.id().unwrap();

    let mut loaded = User::find_by_id(&store, id).unwrap();
    loaded.lname = "King".to_string();
    loaded.update(&store).unwrap();

    let reloaded = User::find_by_id(&store, id).unwrap();
    assert_eq!(reloaded.lname, "King");
    assert_eq!(reloaded.fname, "Ada");
    assert_eq!(reloaded, loaded);
}

#[test]
fn update_round_trips_relation_fields() {
    let (store, user, question) = store_with_question();
    let uid = user.id().unwrap();
    let qid = question.id().unwrap();
    let mut other = Question::new("Other", "Body", uid);
    other.save(&store).unwrap();
    let other_id = other.id().unwrap();

    let mut follow = QuestionFollow::new(qid, uid);
    follow.save(&store).unwrap();
    let mut loaded = QuestionFollow::find_by_id(&store, follow.id().unwrap()).unwrap();
    loaded.question_id = other_id;
    loaded.update(&store).unwrap();
    let reloaded = QuestionFollow::find_by_id(&store, follow.id().unwrap()).unwrap();
    assert_eq!(reloaded.question_id, other_id);
    assert_eq!(reloaded.user_id, uid);
    assert_eq!(reloaded.id(), follow.id());

    let mut like = QuestionLike::new(qid, uid);
    like.save(&store).unwrap();
    let mut loaded = QuestionLike::find_by_id(&store, like.id().unwrap()).unwrap();
    loaded.user_id = 42;
    loaded.update(&store).unwrap();
    let reloaded = QuestionLike::find_by_id(&store, like.id().unwrap()).unwrap();
    assert_eq!(reloaded.user_id, 42);
    assert_eq!(reloaded.question_id, qid);
    assert_eq!(reloaded.id(), like.id());
}

#[test]
fn update_can_clear_reply_parent() {
    let (store, user, question) = store_with_question();
    let mut top = Reply::new("Top", question.id().unwrap(), user.id().unwrap());
    top.save(&store).unwrap();
    let mut nested = Reply::child_of(&top, "Nested", user.id().unwrap()).unwrap();
    nested.save(&store).unwrap();

    nested.parent_id = None;
    nested.update(&store).unwrap();

    let reloaded = Reply::find_by_id(&store, nested.id().unwrap()).unwrap();
    assert!(reloaded.is_top_level());
    assert_eq!(reloaded.body, "Nested");
}

#[test]
fn update_of_vanished_row_is_not_found() {
    let (store, _, question) = store_with_question();
    store
        .conn()
        .execute("DELETE FROM questions WHERE id = ?1", [question.id().unwrap()])
        .unwrap();

    let err = question.update(&store).unwrap_err();
    assert!(matches!(err, RecordError::NotFound { entity: "Question", .. }));
}

#[test]
fn all_returns_rows_in_storage_order() {
    let store = Store::open_memory().unwrap();
    for name in ["Ada", "Alan", "Grace"] {
        User::new(name, "Test").save(&store).unwrap();
    }

    let names: Vec<String> = User::all(&store).unwrap().into_iter().map(|u| u.fname).collect();
    assert_eq!(names, vec!["Ada", "Alan", "Grace"]);
}

#[test]
fn all_on_empty_table() {
    let store = Store::open_memory().unwrap();
    assert!(QuestionLike::all(&store).unwrap().is_empty());
}

#[test]
fn change_all_assigns_field_on_every_row() {
    let store = Store::open_memory().unwrap();
    User::new("Ada", "Lovelace").save(&store).unwrap();
    User::new("Alan", "Turing").save(&store).unwrap();

    let changed = User::change_all(&store, UserField::Lname("Hopper".to_string())).unwrap();
    assert_eq!(changed, 2);

    let users = User::all(&store).unwrap();
    assert!(users.iter().all(|u| u.lname == "Hopper"));
    assert_eq!(users[0].fname, "Ada");
    assert_eq!(users[1].fname, "Alan");
}

#[test]
fn change_all_on_relation_table() {
    let (store, user, question) = store_with_question();
    let qid = question.id().unwrap();
    QuestionLike::new(qid, user.id().unwrap()).save(&store).unwrap();
    QuestionLike::new(qid, user.id().unwrap()).save(&store).unwrap();

    let changed = QuestionLike::change_all(&store, LikeField::UserId(99)).unwrap();
    assert_eq!(changed, 2);
    let likes = QuestionLike::all(&store).unwrap();
    assert!(likes.iter().all(|l| l.user_id == 99 && l.question_id == qid));
}

#[test]
fn dangling_references_are_stored_as_given() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.db");
    drop(Store::create(&path).unwrap());
    let store = Store::open(&path).unwrap();

    let enforced: i64 = store
        .conn()
        .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enforced, 0);

    let mut like = QuestionLike::new(404, 405);
    like.save(&store).unwrap();
    let mut reply = Reply::new("orphan", 77, 88);
    reply.parent_id = Some(99);
    reply.save(&store).unwrap();
    let mut follow = QuestionFollow::new(1, 2);
    follow.save(&store).unwrap();
    follow.user_id = 500;
    follow.update(&store).unwrap();

    assert_eq!(QuestionLike::find_by_id(&store, like.id().unwrap()).unwrap(), like);
    assert_eq!(Reply::find_by_id(&store, reply.id().unwrap()).unwrap(), reply);
    assert_eq!(QuestionFollow::find_by_id(&store, follow.id().unwrap()).unwrap(), follow);
}

#[test]
fn change_all_on_empty_table() {
    let store = Store::open_memory().unwrap();
    let changed = Reply::change_all(&store, ReplyField::Body("x".to_string())).unwrap();
    assert_eq!(changed, 0);
}

#[test]
fn find_by_name_returns_first_match() {
    let store = Store::open_memory().unwrap();
    let mut first = User::new("Ada", "Lovelace");
    first.save(&store).unwrap();
    User::new("Ada", "Lovelace").save(&store).unwrap();

    let found = User::find_by_name(&store, "Ada", "Lovelace").unwrap();
    assert_eq!(found, Some(first));
    assert_eq!(User::find_by_name(&store, "Alan", "Turing").unwrap(), None);
}

#[test]
fn find_by_name_binds_its_arguments() {
    let store = Store::open_memory().unwrap();
    User::new("Ada", "Lovelace").save(&store).unwrap();

    let found = User::find_by_name(&store, "' OR 1=1 --", "x").unwrap();
    assert_eq!(found, None);
}

#[test]
fn malformed_row_is_a_decode_error() {
    let conn = Connection::open_in_memory().unwrap();
    create_schema(&conn).unwrap();
    conn.execute_batch(
        "DROP TABLE users;
         CREATE TABLE users (id INTEGER PRIMARY KEY, fname TEXT, lname TEXT);
         INSERT INTO users (fname, lname) VALUES (NULL, 'Lovelace');",
    )
    .unwrap();
    let store = Store::from_connection(conn).unwrap();

    let err = User::find_by_id(&store, 1).unwrap_err();
    match err {
        RecordError::Decode(e) => {
            assert_eq!(e.table, "users");
            assert_eq!(e.column, "fname");
        }
        other => panic!("expected Decode, got {other}"),
    }
}
