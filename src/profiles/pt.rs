//! Portuguese trigram reference profile.
//!
//! Generated from a sample corpus. Regenerate instead of editing by hand.

pub(crate) static TRIGRAMS: &[&str] = &[
    "de ", "os ", "as ", " qu", " co", " de", "est", "que",
    " di", "ão ", " es", " o ", "em ", "s p", "to ", " a ",
    " e ", " se", "com", "ue ", "e c", "es ", " mu", " pa",
    " pe", "e e", "ent", "er ", "ade", "da ", "dad", "do ",
    "gua", "ito", "o d", "o e", "tar", "te ", "uma", " te",
    "a p", "ado", "ant", "ard", "dos", "e d", "ma ", "mui",
    "nte", "se ", "uit", " as", " do", " li", " lí", " os",
    " à ", "a l", "e q", "ia ", "ida", "is ", "lín", "m d",
    "mpo", "ngu", "o c", "o j", "o s", "om ", "pre", "ria",
    "s d", "s e", "sta", "ta ", "tem", "íng", " ao", " em",
    " ja", " no", " ta", " to", " um", " é ", "a f", "a n",
    "ais", "ala", "am ", "ao ", "ar ", "des", "diz", "e a",
    "emp", "m a", "nta", "nto", "o a", "o m", "omo", "po ",
    "qua", "ra ", "ras", "rde", "s c", "s o", "soa", "stá",
    "tod", "tos", "tá ", "ua ", "uan", " cr", " en", " ma",
    " ne", " po", " pr", " re", "a d", "a e", "a t", "ara",
    "avr", "ber", "ca ", "con", "cri", "der", "dir", "dor",
    "e o", "e p", "e s", "eit", "end", "erd", "ere", "ess",
    "ica", "im ", "ire", "ita", "ize", "lav", "m e", "m m",
    "mo ", "mos", "mpr", "nci", "nde", "ndo", "no ", "o o",
    "o t", "odo", "omp", "ons", "pal", "par", "pes", "rda",
    "re ", "rei", "ren", "res", "s a", "s s", "sso", "ste",
    "tad", "tes", "vra", "zer", "á l", " ap", " bo", " da",
    " fa", " fo", " fr", " ge", " ho", " ig", " la", " nu",
    " ou", " ra", " so", " sã", " vi", "a a", "a c", "a g",
    "a q", "a s", "a u", "ada", "and", "apr", "ava", "azã",
    "aís", "bom", "cad", "cia", "cid", "cio", "ciê", "cur",
    "dim", "dot", "e r", "e t", "e v", "eli", "enq", "ens",
    "era", "ert", "eu ", "fra", "gen", "gni", "iad", "ibe",
    "ici", "ide", "ign", "igu", "imp", "io ", "ion", "ivr",
    "ião", "iên", "jan", "jar", "la ", "lib", "lic", "liv",
    "m o", "man", "men", "nes", "nid", "nqu", "ns ", "nsc",
    "num", "o f", "o p", "o q", "o à", "oa ", "oas", "ode",
    "or ", "ort", "ota", "out", "paí", "per", "pod", "por",
    "prá", "r d", "r m", "r o", "ram", "raz", "rdi", "ros",
    "rta", "rto", "rá ", "s h", "s i", "s n", "s é", "sam",
    "sci", "ser", "seu", "são", "tas", "uai", "utr", "va ",
    "vem", "vid", "zão", "à t",
];
