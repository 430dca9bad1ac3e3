//! Ukrainian trigram reference profile.
//!
//! Generated from a sample corpus. Regenerate instead of editing by hand.

pub(crate) static TRIGRAMS: &[&str] = &[
    "на ", " на", " і ", "ти ", " лю", " мо", "ть ", " по",
    " пр", "люд", "ють", " ба", "ага", "ати", "гат", "ду ",
    "мов", "ого", " во", " пі", " ск", " у ", " як", "а с",
    "баг", "ки ", "ли ", "ля ", "ми ", "ні ", " в ", " ко",
    " ма", " що", " я ", "аза", "ато", "вон", "год", "ече",
    "и н", "и п", "каз", "ни ", "ня ", "о с", "одн", "ска",
    "то ", "ті ", "іст", " вч", " ві", " ду", " з ", " не",
    " об", " ре", " са", " св", " со", "ать", "бід", "ва ",
    "веч", "вча", "дей", "ди ", "дно", "е з", "ей ", "енн",
    "зат", "и г", "ими", "кол", "ку ", "не ", "ним", "ння",
    "обі", "ові", "они", "ою ", "пра", "при", "піс", "рий",
    "роз", "сля", "сті", "ся ", "у в", "у м", "уют", "чер",
    "що ", "юде", "юди", "я в", "я м", "я о", "і б", "і в",
    "і р", "і с", "ів ", "іду", "ісл", " бі", " ве", " ви",
    " га", " до", " ді", " мі", " од", " ра", " ро", " рі",
    " си", " сл", " сь", " те", " ці", " чи", "а в", "а п",
    "а р", "аду", "ала", "арн", "ают", "аїн", "біл", "в с",
    "во ", "вою", "від", "віс", "гар", "го ", "да ", "де ",
    "дин", "дні", "ерю", "же ", "зум", "и в", "и л", "и м",
    "и у", "ийд", "их ", "йде", "кор", "кра", "кі ", "ла ",
    "лен", "му ", "нав", "нні", "о н", "о п", "ова", "ово",
    "ода", "оди", "озу", "оки", "оли", "оло", "ому", "пов",
    "пог", "пок", "рав", "рац", "раї", "реч", "рна", "рю ",
    "сад", "сво", "сов", "сто", "сьо", "сі ", "те ", "тор",
    "тьс", "у с", "цію", "чит", "шли", "ь р", "ько", "ьог",
    "ься", "як ", "які", "і д", "і н", "і п", "ідн", "ізн",
    "іль", "іля", "іти", "ію ", " бр", " бу", " ва", " вв",
    " вс", " го", " гр", " гі", " жи", " за", " зв", " зм",
    " зн", " зр", " зу", " ка", " кн", " кр", " ку", " кі",
    " ле", " ми", " ни", " ні", " пе", " ри", " сп", " ст",
    " та", " ук", " хл", " хо", " ць", " ще", " яс", " ін",
    " іс", " їх", "а з", "а л", "а м", "а і", "ава", "авж",
    "авк", "аво", "авч", "адк", "адн", "аді", "ажл", "ажу",
    "ака", "але", "ама", "амо", "анк", "анн", "анц", "аро",
    "асн", "ате", "ах ", "ацю", "аці", "аю ", "ає ", "б і",
    "бак", "бат", "блю", "бо ", "бод", "бра", "був", "в б",
    "в д", "в л", "в м", "в у", "в ц", "важ", "вах", "вве",
    "вга", "вжд", "вик", "вин",
];
