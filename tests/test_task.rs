use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use wayfinder::{
    http::StatusCode,
    test::TestRequest,
    web::{self, fail, fn_task, lazy, ready, sequence},
    BoxTask, Error, Matched, Response, Router, Task, TaskExt as _,
};

fn counter() -> (Arc<AtomicUsize>, impl Task<Output = usize, Error = ()> + Clone) {
    let hits = Arc::new(AtomicUsize::new(0));
    let task = {
        let hits = Arc::clone(&hits);
        fn_task(move || Ok::<_, ()>(hits.fetch_add(1, Ordering::SeqCst) + 1))
    };
    (hits, task)
}

#[test]
fn every_run_repeats_the_work() {
    let (hits, task) = counter();

    assert_eq!(task.run(), Ok(1));
    assert_eq!(task.run(), Ok(2));
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[test]
fn composition_does_not_run_anything() {
    let (hits, task) = counter();

    let composed = task
        .clone()
        .map(|n| n * 10)
        .and_then(move |n| task.clone().map(move |m| n + m))
        .zip(ready(()))
        .instrument("composed");

    assert_eq!(hits.load(Ordering::SeqCst), 0);

    assert_eq!(composed.run(), Ok((12, ())));
    assert_eq!(hits.load(Ordering::SeqCst), 2);

    assert_eq!(composed.run(), Ok((34, ())));
    assert_eq!(hits.load(Ordering::SeqCst), 4);
}

#[test]
fn failure_stops_the_chain() {
    let log = Arc::new(Mutex::new(Vec::new()));

    let step = |name: &'static str| {
        let log = Arc::clone(&log);
        fn_task(move || {
            log.lock().unwrap().push(name);
            Ok::<_, &'static str>(name)
        })
    };

    let task = step("first")
        .and_then(|_| fail::<&'static str, _>("broken"))
        .and_then({
            let step = step("never");
            move |_| step.clone()
        });

    assert_eq!(task.run(), Err("broken"));
    assert_eq!(*log.lock().unwrap(), ["first"]);

    let recovered = task.or_else(|err| ready::<_, ()>(err)).map(str::len);
    assert_eq!(recovered.run(), Ok(6));
}

#[test]
fn then_sees_both_outcomes() {
    let describe = |res: Result<u32, String>| {
        ready::<_, ()>(match res {
            Ok(n) => format!("ok {n}"),
            Err(err) => format!("err {err}"),
        })
    };

    assert_eq!(ready(1).then(describe).run(), Ok("ok 1".to_owned()));
    assert_eq!(
        fail("nope".to_owned()).then(describe).run(),
        Ok("err nope".to_owned())
    );
}

#[test]
fn sequence_collects_in_order() {
    let (hits, task) = counter();

    let all = sequence(vec![task.clone(), task.clone(), task]);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert_eq!(all.run(), Ok(vec![1, 2, 3]));
    assert_eq!(all.run(), Ok(vec![4, 5, 6]));
}

#[test]
fn boxed_tasks_run_on_other_threads() {
    let (hits, task) = counter();
    let task: BoxTask<usize, ()> = task.boxed();

    let result = std::thread::spawn(move || task.run()).join().unwrap();
    assert_eq!(result, Ok(1));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn handler_tasks_run_per_response() {
    let hits = Arc::new(AtomicUsize::new(0));

    let router = Router::build()
        .route(web::post("/hit"), {
            let hits = Arc::clone(&hits);
            move |_: Matched| {
                let hits = Arc::clone(&hits);
                lazy(move || format!("hit {}", hits.fetch_add(1, Ordering::SeqCst) + 1))
            }
        })
        .finish();

    let task = router.call(TestRequest::post().uri("/hit").to_request());
    assert_eq!(hits.load(Ordering::SeqCst), 0);

    assert_eq!(task.run().unwrap().body_str(), Some("hit 1"));
    assert_eq!(task.run().unwrap().body_str(), Some("hit 2"));

    let res = router.respond(TestRequest::post().uri("/hit").to_request());
    assert_eq!(res.body_str(), Some("hit 3"));
}

#[test]
fn errors_surface_only_when_run() {
    let router = Router::build()
        .route(web::get("/fail"), |_: Matched| {
            fn_task(|| {
                let err = serde_json::from_str::<u8>("x").unwrap_err();
                Err::<Response, _>(Error::from(err))
            })
        })
        .finish();

    let task = router.call(TestRequest::get().uri("/fail").to_request());

    let err = task.run().unwrap_err();
    assert!(err.as_error::<serde_json::Error>().is_some());

    let res = router.respond(TestRequest::get().uri("/fail").to_request());
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
