/// Execute an aggregate command deterministically (no IO, no async).
///
/// This is the canonical decide-then-evolve lifecycle:
///
/// 1. **Decide**: calls `aggregate.handle(command)` to get events (pure, no
///    mutation). Every validation happens here; a rejected command leaves the
///    aggregate untouched.
/// 2. **Evolve**: applies each event via `aggregate.apply(event)`. `apply` is
///    infallible, so once the decision succeeds the whole batch is applied.
///
/// There is no observable intermediate state: the caller holds the only
/// `&mut` reference for the duration of the call, which is what makes the
/// add-to-cart step (validate → mutate cart → mutate stock) one atomic local
/// transaction in a single-threaded system.
///
/// Returns the applied events so the caller can publish them to an
/// [`EventBus`](crate::EventBus) for observers.
pub fn execute<A>(aggregate: &mut A, command: &A::Command) -> Result<Vec<A::Event>, A::Error>
where
    A: till_core::Aggregate,
{
    let events = A::handle(aggregate, command)?;
    for ev in &events {
        A::apply(aggregate, ev);
    }
    Ok(events)
}
