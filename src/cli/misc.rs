use dadda_lib::context::Context;

pub fn print_stats(the_context: &Context) {
    let counters = &the_context.counters;
    println!("c Multipliers      {}", counters.multipliers);
    println!("c AND gates        {}", counters.and_gates);
    println!("c Half adders      {}", counters.half_adders);
    println!("c Full adders      {}", counters.full_adders);
    println!("c Unit clauses     {}", counters.unit_clauses);
    println!("c Linked bits      {}", counters.linked_bits);
    println!("c Atoms            {}", the_context.atom_count());
    println!("c Clauses          {}", the_context.clause_count());
    println!("c Literals         {}", the_context.clause_db.literal_count());
}
