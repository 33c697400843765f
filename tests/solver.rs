//! End-to-end runs of the TSP solver on small instances.

use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tsp_evolve::ga::{CostMatrix, Genome, Selection, TspConfig, TspSolver};
use tsp_evolve::random::create_rng;
use tsp_evolve::TspError;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn four_cities() -> CostMatrix {
    CostMatrix::from_rows(&[
        [0, 10, 15, 20],
        [10, 0, 35, 25],
        [15, 35, 0, 30],
        [20, 25, 30, 0],
    ])
    .unwrap()
}

/// Cities on a circle; the optimal tour visits them in angular order.
fn circle_cities(n: usize) -> (CostMatrix, f64) {
    let points: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / n as f64;
            (100.0 * angle.cos(), 100.0 * angle.sin())
        })
        .collect();
    let rows: Vec<Vec<f64>> = points
        .iter()
        .map(|a| {
            points
                .iter()
                .map(|b| ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt())
                .collect()
        })
        .collect();
    let side = ((points[0].0 - points[1].0).powi(2) + (points[0].1 - points[1].1).powi(2)).sqrt();
    (CostMatrix::from_rows(&rows).unwrap(), side * n as f64)
}

fn assert_permutation(genome: &Genome, cities: usize) {
    let mut sorted = genome.tour().to_vec();
    sorted.sort_unstable();
    let expected: Vec<usize> = (0..cities).filter(|&c| c != genome.starting_city()).collect();
    assert_eq!(sorted, expected);
}

#[test]
fn four_cities_converge_to_80() {
    init_logger();
    let m = four_cities();
    for selection in [Selection::Roulette, Selection::Tournament(10)] {
        let config = TspConfig::default()
            .with_population_size(100)
            .with_reproduction_size(20)
            .with_max_generations(50)
            .with_selection(selection)
            .with_target_fitness(80.0)
            .with_seed(11);
        let result = TspSolver::new(&m, 0, config).unwrap().optimize().unwrap();

        assert_eq!(result.best_fitness, 80.0);
        assert!(result.best.tour() == [1, 3, 2] || result.best.tour() == [2, 3, 1]);
        // 80 is optimal, so a strict "< 80" target is never met
        assert!(!result.reached_target);
        assert_eq!(result.generations, 50);
        assert!(result.best.to_string().ends_with("Length: 80"));
    }
}

#[test]
fn two_cities_single_tour() {
    init_logger();
    let m = CostMatrix::from_rows(&[vec![0.0, 4.5], vec![4.5, 0.0]]).unwrap();
    let config = TspConfig::fast().with_max_generations(5).with_seed(3);
    let result = TspSolver::new(&m, 0, config).unwrap().optimize().unwrap();
    assert_eq!(result.best.tour(), &[1]);
    assert_eq!(result.best_fitness, 9.0);
    assert_eq!(result.best.to_string(), "Path: 0 1 0\nLength: 9");
}

#[test]
fn circle_tour_improves_on_random() {
    init_logger();
    let n = 12;
    let (m, optimum) = circle_cities(n);
    let config = TspConfig::default()
        .with_population_size(400)
        .with_reproduction_size(60)
        .with_max_generations(150)
        .with_tournament_size(10)
        .with_mutation_rate(0.2)
        .with_seed(5);
    let result = TspSolver::new(&m, 4, config).unwrap().optimize().unwrap();

    assert_permutation(&result.best, n);
    assert!((result.best_fitness - m.tour_cost(4, result.best.tour())).abs() < 1e-9);
    assert!(result.best_fitness >= optimum - 1e-9);
    assert!(
        result.best_fitness < result.fitness_history[0],
        "no improvement over the initial population: {}",
        result.best_fitness
    );
}

#[test]
fn asymmetric_costs_respect_direction() {
    init_logger();
    // going "forwards" costs 1, "backwards" costs 10
    let n = 6;
    let rows: Vec<Vec<f64>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| match j {
                    _ if j == i => 0.0,
                    _ if j == (i + 1) % n => 1.0,
                    _ => 10.0,
                })
                .collect()
        })
        .collect();
    let m = CostMatrix::from_rows(&rows).unwrap();
    let config = TspConfig::fast().with_seed(8).with_target_fitness(6.5);
    let result = TspSolver::new(&m, 2, config).unwrap().optimize().unwrap();

    assert!(result.reached_target);
    assert_eq!(result.best.tour(), &[3, 4, 5, 0, 1]);
    assert_eq!(result.best_fitness, 6.0);
}

#[test]
fn random_matrices_keep_invariants() {
    init_logger();
    let mut rng = create_rng(99);
    for n in [3usize, 5, 9] {
        let rows: Vec<Vec<f64>> = (0..n)
            .map(|_| (0..n).map(|_| rng.random_range(1.0..50.0)).collect())
            .collect();
        let m = CostMatrix::from_rows(&rows).unwrap();
        let start = rng.random_range(0..n);
        let config = TspConfig::default()
            .with_population_size(31)
            .with_reproduction_size(7)
            .with_max_generations(20)
            .with_selection(Selection::Roulette);
        let solver = TspSolver::new(&m, start, config).unwrap();
        let result = solver.optimize_with_rng(&mut rng).unwrap();

        assert_permutation(&result.best, n);
        assert_eq!(result.best_fitness, m.tour_cost(start, result.best.tour()));
        assert!(result
            .fitness_history
            .windows(2)
            .all(|w| w[1] <= w[0]));
    }
}

#[test]
fn cancellation_from_another_thread() {
    init_logger();
    let (m, _) = circle_cities(30);
    let config = TspConfig::default()
        .with_population_size(200)
        .with_reproduction_size(20)
        .with_max_generations(1_000_000)
        .with_time_limit_ms(10_000)
        .with_seed(1);
    let solver = TspSolver::new(&m, 0, config).unwrap();

    let cancel = Arc::new(AtomicBool::new(false));
    let flag = cancel.clone();
    std::thread::spawn(move || {
        std::thread::sleep(std::time::Duration::from_millis(20));
        flag.store(true, Ordering::Relaxed);
    });

    let result = solver.optimize_with_cancel(Some(cancel)).unwrap();
    assert!(result.cancelled);
    assert!(!result.timed_out);
    assert!(result.generations < 1_000_000);
    assert_permutation(&result.best, 30);
}

#[test]
fn time_limit_stops_run() {
    init_logger();
    let (m, _) = circle_cities(30);
    let config = TspConfig::default()
        .with_population_size(200)
        .with_reproduction_size(20)
        .with_max_generations(1_000_000)
        .with_time_limit_ms(30)
        .with_seed(2);
    let result = TspSolver::new(&m, 0, config).unwrap().optimize().unwrap();
    assert!(result.timed_out);
    assert!(!result.cancelled);
    assert!(result.generations < 1_000_000);
}

#[test]
fn invalid_inputs_are_rejected() {
    assert_eq!(
        CostMatrix::from_rows(&[vec![0.0, 1.0, 2.0], vec![1.0, 0.0, 2.0]]),
        Err(TspError::NotSquare {
            row: 0,
            len: 3,
            expected: 2
        })
    );

    let m = four_cities();
    assert!(matches!(
        TspSolver::new(&m, 9, TspConfig::default()),
        Err(TspError::StartingCityOutOfRange { city: 9, cities: 4 })
    ));
    assert!(matches!(
        TspSolver::new(&m, 0, TspConfig::default().with_population_size(10)),
        Err(TspError::Config(_))
    ));
}
