use crate::domain::ticket::Ticket;

/// Per-kind urgency policy. Higher scores mean more urgent.
pub trait UrgencyScorable {
    fn ticket(&self) -> &Ticket;

    fn urgency_score(&self) -> i64;

    /// `#<id> (<requester>) pr=<priority> open=<days>d score=<score> est=<hours>h`
    fn summary(&self) -> String {
        let ticket = self.ticket();
        format!(
            "#{} ({}) pr={} open={}d score={} est={}h",
            ticket.id(),
            ticket.requester(),
            ticket.priority(),
            ticket.days_open(),
            self.urgency_score(),
            ticket.estimate_resolution_hours()
        )
    }
}
