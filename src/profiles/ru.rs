//! Russian trigram reference profile.
//!
//! Generated from a sample corpus. Regenerate instead of editing by hand.

pub(crate) static TRIGRAMS: &[&str] = &[
    " по", " и ", " в ", " на", "на ", " пр", "да ", "ом ",
    "ть ", " ко", "ать", " лю", " мн", " яз", "а с", "е о",
    "зык", "ли ", "мно", "ног", "ого", "тор", "язы", "ени",
    "ет ", "и и", "люд", "ми ", "ны ", " го", " ка", " об",
    " он", " ра", " ск", " сл", " со", " ст", " эт", " я ",
    "а р", "аза", "ая ", "год", "е м", "и п", "и р", "ие ",
    "каз", "ке ", "кот", "оро", "ото", "пос", "рав", "руг",
    "ска", "то ", "ыке", "это", " вс", " др", " ис", " мо",
    " не", " са", " св", " у ", " уч", " хо", " чт", "а в",
    "ают", "бед", "в с", "гда", "го ", "дет", "дру", "ду ",
    "еда", "ей ", "ень", "ест", "зат", "и н", "и с", "иде",
    "ии ", "их ", "ка ", "ком", "ле ", "лов", "м я", "ни ",
    "ным", "ня ", "о п", "о с", "обе", "ове", "оги", "одн",
    "ое ", "они", "оры", "оря", "осл", "пра", "при", "сво",
    "сег", "сле", "сло", "ств", "сто", "стр", "т м", "тат",
    "том", "тра", "что", "ый ", "ыми", "ют ", "ят ", " ве",
    " во", " де", " до", " из", " ма", " ми", " мы", " ро",
    " ру", " се", " то", " уж", " че", "а я", "аду", "ажд",
    "ак ", "ала", "аны", "б и", "бод", "в м", "в э", "ва ",
    "вес", "воб", "вор", "все", "гие", "гов", "де ", "дей",
    "дел", "ди ", "дня", "дый", "е г", "е п", "е с", "е у",
    "его", "ели", "ем ", "жды", "жин", "и в", "и д", "иги",
    "ин ", "ист", "ия ", "й в", "й с", "к и", "каж", "как",
    "ког", "ла ", "лен", "лож", "ная", "не ", "ние", "нь ",
    "обо", "ов ", "ово", "огд", "ода", "оже", "ой ", "ока",
    "ори", "ост", "оче", "оша", "пог", "пок", "пре", "раз",
    "ран", "рид", "род", "рош", "рус", "рые", "рят", "сад",
    "ско", "сов", "сск", "ста", "ся ", "т в", "т с", "ти ",
    "той", "у м", "уг ", "ужи", "усс", "уча", "учи", "хор",
    "чен", "чит", "шая", "шли", "шь ", "ы п", "ые ", "юде",
    "юди", "я и", "я с", " бр", " бы", " ва", " дл", " ду",
    " ещ", " жи", " зв", " зн", " иг", " им", " их", " кн",
    " ку", " ле", " ли", " ни", " о ", " ог", " от", " оч",
    " пы", " ре", " ры", " с ", " си", " сп", " су", " сы",
    " ут", " хл", " чи", " яс", "а л", "а м", "а у", "а х",
    "або", "ава", "авн", "аво", "авы", "аде", "ае ", "ажн",
    "азн", "азу", "ака", "але", "амо", "анц", "ат ", "ате",
    "атс", "ах ", "аю ", "бак",
];
