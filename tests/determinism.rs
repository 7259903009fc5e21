use splashy::{FixedTimestep, Simulator, Vec2};

fn run_storm() -> Vec<Vec2<f32>> {
    let mut sim: Simulator<f32> = Simulator::new(640.0, 64, 200.0, ()).unwrap();
    let mut clock = FixedTimestep::new(1.0 / 120.0);
    for frame in 0..240 {
        if frame % 37 == 0 {
            let x = (frame * 53 % 640) as f32;
            sim.splash_with_width(x, -120.0, 40.0);
        }
        clock.advance(&mut sim, 1.0 / 60.0);
    }
    sim.snapshot()
}

#[test]
fn simulation_deterministic() {
    let results: Vec<_> = (0..5).map(|_| run_storm()).collect();

    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
    }
}

#[test]
fn clone_follows_the_same_trajectory() {
    let mut original: Simulator<f64> = Simulator::new(100.0, 21, 0.0, ()).unwrap();
    original.splash(30.0, 12.0);
    for _ in 0..10 {
        original.update(1.0 / 60.0);
    }
    let mut copy = original.clone();
    for _ in 0..100 {
        original.update(1.0 / 60.0);
        copy.update(1.0 / 60.0);
    }
    assert_eq!(original.snapshot(), copy.snapshot());
}
