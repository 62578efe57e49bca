// Phrase fixtures with expected outputs
// WHY: Golden-output testing requires deterministic input/output pairs

/// One phrase per line covering every decision step
pub const MIXED_PHRASES: &str = "hour
honest mistake
university
one-way street
apple
FBI agent
CIA file
M.B.A. program
dog
Mother";

/// Expected plain output for MIXED_PHRASES
pub const MIXED_EXPECTED: &str = "an hour
an honest mistake
a university
a one-way street
an apple
an FBI agent
a CIA file
an M.B.A. program
a dog
a Mother";
