/*!
The weight, aka. entrenchment degree, of a belief.

Every formula held in a [belief database](crate::db::belief) is paired with a weight, and a belief with a higher weight is more deeply held.
Weights order beliefs during [selection](crate::procedures::selection), where remainders are scored by the sum of the weights of their members.

Weights are the only entrenchment order used by the library.
In particular, the order in which beliefs were added to a base carries no weight (pun intended).
*/

/// The weight, aka. entrenchment degree, of a belief.
pub type Weight = f64;
