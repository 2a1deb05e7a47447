use ticket_estimator::{
    BugTicket, EstimateParams, RequestTicket, Severity, Ticket, TicketError, UrgencyScorable,
};

/// Ticket kind with a fixed score, so summaries can be checked exactly.
struct FixedScoreTicket {
    ticket: Ticket,
    score: i64,
}

impl UrgencyScorable for FixedScoreTicket {
    fn ticket(&self) -> &Ticket {
        &self.ticket
    }

    fn urgency_score(&self) -> i64 {
        self.score
    }
}

#[test]
fn test_summary_format() {
    let stub = FixedScoreTicket {
        ticket: Ticket::new(7, "alice", 2, 3).unwrap(),
        score: 42,
    };

    let expected_estimate = stub.ticket().estimate_resolution_hours();
    assert_eq!(expected_estimate, 11);
    assert_eq!(
        stub.summary(),
        format!("#7 (alice) pr=2 open=3d score=42 est={}h", expected_estimate)
    );
}

#[test]
fn test_summary_ignores_tuning_parameters() {
    let bug = BugTicket::new(12, "carol", 5, 0, Severity::Critical).unwrap();
    assert_eq!(bug.summary(), "#12 (carol) pr=5 open=0d score=80 est=2h");
    assert_eq!(bug.to_string(), bug.summary());
}

#[test]
fn test_construction_rejects_invalid_identity_fields() {
    for (priority, days_open) in [(0, 0), (6, 0), (3, -1)] {
        let result = Ticket::new(1, "alice", priority, days_open);
        assert!(matches!(result, Err(TicketError::InvalidArgument(_))));
    }

    assert!(Ticket::new(1, "alice", 1, 0).is_ok());
    assert!(Ticket::new(1, "alice", 5, 0).is_ok());
}

#[test]
fn test_worked_examples() {
    let ticket = Ticket::new(1, "alice", 3, 4).unwrap();
    assert_eq!(ticket.estimate_resolution_hours(), 10);
    assert_eq!(ticket.estimate_resolution_hours_with(2, 5), 25);

    let urgent = Ticket::new(2, "bob", 5, 0).unwrap();
    assert_eq!(urgent.estimate_resolution_hours_with(0, -3), 2);
}

#[test]
fn test_estimator_is_floored_for_low_tuning_inputs() {
    let ticket = Ticket::new(3, "dave", 4, 2).unwrap();
    let floor = ticket.estimate_resolution_hours_with(1, 0);

    for c in -5..=1 {
        for a in -5..=0 {
            assert_eq!(ticket.estimate_resolution_hours_with(c, a), floor);
        }
    }
}

#[test]
fn test_estimator_matches_closed_form() {
    for priority in 1..=5 {
        for days_open in [0, 1, 7, 30] {
            let ticket = Ticket::new(1, "erin", priority, days_open).unwrap();
            let base = i64::from((6 - priority) * 2 + days_open);

            for c in -2i64..5 {
                for a in -2i64..5 {
                    let expected = std::cmp::max(1, base * c.max(1) + a.max(0));
                    assert_eq!(ticket.estimate_resolution_hours_with(c, a), expected);
                    assert_eq!(ticket.estimate(EstimateParams::new(c, a)), expected);
                }
                assert_eq!(
                    ticket.estimate_resolution_hours_with_complexity(c),
                    ticket.estimate_resolution_hours_with(c, 0)
                );
            }
        }
    }
}

#[test]
fn test_variants_share_the_estimator() {
    let bug = BugTicket::new(1, "frank", 2, 5, Severity::Major).unwrap();
    let request = RequestTicket::new(1, "frank", 2, 5).unwrap();

    assert_eq!(
        bug.ticket().estimate_resolution_hours_with(3, 1),
        request.ticket().estimate_resolution_hours_with(3, 1)
    );
    assert!(bug.urgency_score() > request.urgency_score());
}

#[test]
fn test_tickets_can_be_shared_across_threads() {
    let ticket = std::sync::Arc::new(Ticket::new(9, "grace", 3, 4).unwrap());

    let handles: Vec<_> = (1..=4)
        .map(|c| {
            let ticket = ticket.clone();
            std::thread::spawn(move || ticket.estimate_resolution_hours_with_complexity(c))
        })
        .collect();

    let results: Vec<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![10, 20, 30, 40]);
}
