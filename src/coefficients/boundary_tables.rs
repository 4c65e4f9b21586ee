//! Compiled-in boundary scaling filters, orders 2 through 8
//!
//! Interval-adapted Daubechies boundary filters built on the symmlet of the
//! same order. Row `k` of an order-`p` family is the refinement row of
//! boundary function `k` and holds `p + 2k + 1` values.
//!
//! Left rows, index `0..=p+2k`: entries `0..p` weigh the `p` boundary
//! functions at the finer scale, entries `p..=p+2k` weigh the interior
//! translates `p..=p+2k`. Right rows mirror that layout on `-(p+2k)..=0`,
//! entry `-l` pairing with the `l`-th left entry.
//!
//! Member functions are orthonormal, so the rows of one family are
//! orthonormal too when aligned by index.

static LEFT2: [&[f64]; 2] = [
    &[
        0.6033325119280526,
        0.6908955318391036,
        -0.39831299769822787,
    ],
    &[
        0.03751746045244657,
        0.45732765985176865,
        0.8500881025491647,
        0.22382035698311437,
        -0.12922274335431921,
    ],
];

static LEFT3: [&[f64]; 3] = [
    &[
        0.3888997637614177,
        -0.08820782820047893,
        -0.8478413084713113,
        0.3494874367414699,
    ],
    &[
        -0.6211483178519519,
        0.5225273932046867,
        -0.20000800300190627,
        0.33786734863590495,
        -0.399770770411861,
        0.16482012973434326,
    ],
    &[
        -0.009587863778704134,
        0.0003712255168422738,
        0.32600971011035385,
        0.801648164413685,
        0.4720552620274488,
        -0.14004208096395093,
        -0.0854251000994754,
        0.03521962365197237,
    ],
];

static LEFT4: [&[f64]; 4] = [
    &[
        0.9097539257829954,
        0.40416588940201725,
        0.0890403186567939,
        -0.011984192014966212,
        -0.03042908413918278,
    ],
    &[
        -0.27285140766949223,
        0.5090815232314927,
        0.6236424433723663,
        0.46284008632544893,
        0.24674764172786637,
        -0.017669533291129223,
        -0.04517364549032732,
    ],
    &[
        0.1261179285980971,
        -0.23085572680672167,
        -0.052799235246625574,
        0.2192651712894186,
        0.46348072109960975,
        0.7001197140431247,
        0.4120325789760463,
        -0.026222762497916066,
        -0.0670406941338181,
    ],
    &[
        -0.029079804272549244,
        0.05992807229431816,
        0.006176427778095342,
        -0.04021099904308589,
        -0.039525870128122906,
        -0.0525990625736311,
        0.32894944796959846,
        0.7966378967253159,
        0.4901130336402125,
        -0.029432877677387673,
        -0.07524762312912839,
    ],
];

static LEFT5: [&[f64]; 5] = [
    &[
        0.930249065680008,
        0.3488878120805515,
        0.10985784453203876,
        0.027010259579573866,
        0.007897329607563286,
        0.0073008520328811,
    ],
    &[
        -0.30995011881346834,
        0.598721400818387,
        0.6208411494927638,
        0.3720164549882816,
        0.1451060378543539,
        0.006263262142893923,
        0.01687072021124967,
        0.0156211551792676,
    ],
    &[
        0.11384014789590514,
        -0.36418318107132314,
        0.012289161667611865,
        0.41175902094058103,
        0.5954973448354556,
        0.5457944279904569,
        0.17564161852997554,
        -0.017516712766222978,
        0.023765810496297935,
        0.022005546240769357,
    ],
    &[
        -0.040988169807817984,
        0.14310559818024685,
        -0.06777711665683744,
        -0.17409804660833847,
        -0.09559132536191639,
        0.15129812202850118,
        0.6357421628588481,
        0.6823643464874577,
        0.19630911407639956,
        -0.033019969815913056,
        0.028335620391531105,
        0.02623688364778704,
    ],
    &[
        0.007965029532157657,
        -0.027961220021094954,
        0.017062385997657747,
        0.029286554752051514,
        0.0028578069912674974,
        -0.04686793276798438,
        -0.17026774713046197,
        0.030281478731125838,
        0.635173346688196,
        0.7207789094116465,
        0.19954699392986552,
        -0.03864256419373591,
        0.02947288315107435,
        0.027289912672272956,
    ],
];

static LEFT6: [&[f64]; 6] = [
    &[
        0.9231184459827134,
        0.378106450925123,
        0.06815972396703145,
        -0.010633929345904408,
        -0.009724819798060436,
        0.001297887318107859,
        0.005723757426449213,
    ],
    &[
        -0.2868924124983523,
        0.5940469386558769,
        0.660960433566934,
        0.3412988002024741,
        0.09716877075342281,
        -0.018608555771495335,
        -0.04013700005386016,
        0.0015373074813243234,
        0.006783960389812733,
    ],
    &[
        0.14728709322956648,
        -0.34689451232731777,
        0.06221043772843235,
        0.49380221083397513,
        0.5849105894848815,
        0.45987888328914095,
        0.22742245290354163,
        -0.027889536798054962,
        -0.06367943023348946,
        0.0021777115677159716,
        0.00960998967044342,
    ],
    &[
        -0.08324138021415481,
        0.2035630921095718,
        -0.0828913195517805,
        -0.19399041046847731,
        -0.019084579671602233,
        0.26364035400839486,
        0.5123094150134762,
        0.6538041187325165,
        0.36956011861934984,
        -0.03993953251104206,
        -0.09479455727644803,
        0.002986558645238177,
        0.013179338419464962,
    ],
    &[
        0.031648533638614765,
        -0.08214471961046124,
        0.04327551058497839,
        0.06830653932240477,
        -0.004840048149489018,
        -0.07320834090887074,
        -0.05786918156898171,
        0.020558552086915774,
        0.4001944206350281,
        0.7644983569031608,
        0.46538025118424936,
        -0.04686421162944044,
        -0.113713697920406,
        0.0034132973174638604,
        0.01506248690104681,
    ],
    &[
        -0.00555080497108721,
        0.014710879258826488,
        -0.008859117911408393,
        -0.0115892336474091,
        0.0015698322588766985,
        0.011571111711959127,
        0.007445526684967673,
        0.029024939030868883,
        -0.02999940974807617,
        -0.06576340467841246,
        0.34382587858781294,
        0.7867130346354817,
        0.489584492012585,
        -0.048254686695173486,
        -0.11779932512805623,
        0.0034884756651503944,
        0.015394240267938427,
    ],
];

static LEFT7: [&[f64]; 7] = [
    &[
        0.9426568713052474,
        0.2691475417595771,
        0.16858976884587615,
        0.09379442213852755,
        0.0400160017109188,
        0.010575208155835838,
        -0.0018045179154928558,
        0.004620417361847936,
    ],
    &[
        -0.32373381937144624,
        0.6746802222116423,
        0.5985769135816977,
        0.23314278989263593,
        0.007615188820669548,
        0.08787238208649716,
        0.13278227797259545,
        -0.04208296665539391,
        -0.004763766998115272,
        0.012197559725581317,
    ],
    &[
        -0.027133118082215413,
        -0.289911047675361,
        0.06661404639308692,
        0.7251175150692857,
        0.5750729858020699,
        0.04362186444869626,
        -0.18579806050737235,
        0.12010456337553901,
        0.05011061229681953,
        -0.029915312773397117,
        -0.0015733936048262609,
        0.004028652634419131,
    ],
    &[
        0.024282973857226508,
        -0.010125346188208525,
        -0.15891244030833554,
        -0.1400872184889243,
        0.3332116140073309,
        0.7053065273373127,
        0.5793528971877089,
        0.0038966144701273447,
        -0.059554717649694,
        0.07479188862804811,
        0.030813743758696416,
        -0.013402066038370509,
        -0.0010473505509085868,
        0.0026817266468704935,
    ],
    &[
        0.0023964154927974485,
        -0.021994419674838967,
        0.038312734982637216,
        0.008416826936248366,
        -0.14045537266058347,
        -0.0997551287338174,
        0.26712555263705623,
        0.7725679637477159,
        0.5400947776471583,
        0.013951368066701815,
        -0.04947167749241056,
        0.06809969284847844,
        0.030442302279662613,
        -0.012596308031542193,
        -0.0010450268488928836,
        0.0026757768398937443,
    ],
    &[
        -0.0009493922981276666,
        0.00844574006140247,
        -0.00846228310865061,
        -0.0031005222900597987,
        0.022690525071552708,
        -0.009675176424913534,
        -0.10135455173041916,
        -0.1405275956184581,
        0.2877816729902182,
        0.7686169119806211,
        0.5358841401195588,
        0.01743190444991202,
        -0.049490554611099184,
        0.0678506739004146,
        0.030505657856917414,
        -0.012628737333849312,
        -0.0010471023540297255,
        0.002681091142183801,
    ],
    &[
        0.00013641201697403707,
        -0.0011530145217820084,
        0.0010501961467138353,
        0.0006396328807054688,
        -0.0019405256646105658,
        0.0019628250196881197,
        0.009431646581499914,
        0.004027633416556954,
        -0.10768548882495478,
        -0.1401281648000338,
        0.28867997209266505,
        0.7677614603696609,
        0.5360881498361947,
        0.01744975916837201,
        -0.04954996629705795,
        0.06789074612174154,
        0.030515261186490384,
        -0.01263602513523944,
        -0.0010473790212205565,
        0.002681799544711801,
    ],
];

static LEFT8: [&[f64]; 8] = [
    &[
        0.9281136259565169,
        0.36686182862300215,
        0.06266997446688691,
        -0.007647264163920706,
        -0.005088004809421823,
        0.0011718985392710289,
        0.0016560554726931828,
        -0.00019293329997427982,
        -0.0012036537071286493,
    ],
    &[
        -0.29266344314435355,
        0.6373078980263961,
        0.6452435440362955,
        0.2965161470732702,
        0.0590625434248296,
        -0.013669656412924211,
        -0.013233185224757407,
        0.002213708145069263,
        0.008306912600571757,
        -0.00018921998263011778,
        -0.0011805617373381444,
    ],
    &[
        0.15373942802342058,
        -0.3933877380567954,
        0.13686450248700457,
        0.606447030852672,
        0.5685338138459415,
        0.3166230148931076,
        0.09637901838774975,
        -0.02215743488576854,
        -0.041059599196150126,
        0.003062891878587771,
        0.011915100292341142,
        -0.00024735066347344217,
        -0.0015432446665676338,
    ],
    &[
        -0.09143117076547629,
        0.25719332351325186,
        -0.1858137199679514,
        -0.231800050145085,
        0.15988590500866565,
        0.48710092574280667,
        0.5734443542672375,
        0.44506188996385043,
        0.20330904984811218,
        -0.033310816733475815,
        -0.06859620276552103,
        0.004406096843166531,
        0.01763488599518741,
        -0.0003388224811524195,
        -0.0021139461669882516,
    ],
    &[
        0.05709470786096545,
        -0.1665850441589235,
        0.14540472144648273,
        0.10155386490904873,
        -0.13628521576665018,
        -0.17693452427624512,
        0.008596479477494843,
        0.3062987787879072,
        0.5431752459552387,
        0.6140955156675371,
        0.32849661449522904,
        -0.047235340366367895,
        -0.10397623607881114,
        0.006053819362159522,
        0.02473853830711923,
        -0.00044803609984969136,
        -0.0027953404766065575,
    ],
    &[
        -0.027718851747615954,
        0.08389262397816155,
        -0.08147463456882455,
        -0.03866640179716354,
        0.07464550829672319,
        0.06920099669309908,
        -0.022316536105470568,
        -0.10201290589720675,
        -0.06275852808687762,
        0.0868388760887936,
        0.454074112708501,
        0.7328223559287242,
        0.43194376221902564,
        -0.057341794666714456,
        -0.13148964331739021,
        0.0071959654940960335,
        0.02979946085159179,
        -0.000519032396130208,
        -0.0032382932224872115,
    ],
    &[
        0.008529185203366247,
        -0.02624362017357975,
        0.02697489972531159,
        0.009748173020332384,
        -0.024317268987104224,
        -0.019013190602464928,
        0.00869552241528742,
        0.027295522535360852,
        0.012311552099394054,
        0.009187597931265529,
        -0.04745631967223692,
        -0.029240264728246115,
        0.38317320415267564,
        0.7723764353097977,
        0.4743837775215531,
        -0.06082976217709153,
        -0.14181450376103327,
        0.0075654913480738325,
        0.03149214930911817,
        -0.0005401012057832181,
        -0.003369743559718377,
    ],
    &[
        -0.001148179448635936,
        0.0035673479622222535,
        -0.0037847853194664465,
        -0.001105680378690668,
        0.0033871806436536036,
        0.002395725347602581,
        -0.0012811740823383874,
        -0.0034079890214937015,
        -0.001283416573124846,
        -0.009841020565844214,
        0.006341196702691493,
        0.046195392199919284,
        -0.029434160811137193,
        -0.0509461309562762,
        0.3655480429317898,
        0.7770499808097898,
        0.48106950950354627,
        -0.061260396839762636,
        -0.14324368965697917,
        0.007606483136675688,
        0.031689815237717495,
        -0.0005420982042088486,
        -0.003382203025669351,
    ],
];

static RIGHT2: [&[f64]; 2] = [
    &[
        0.2303890437969692,
        0.43489699796570297,
        0.8705087533498659,
    ],
    &[
        0.4431490496375588,
        0.7675566692981142,
        0.37495533164568656,
        0.19015141842995545,
        -0.19423340742741207,
    ],
];

static RIGHT3: [&[f64]; 3] = [
    &[
        0.058961010685801576,
        0.15098721532840245,
        0.3823606558623059,
        0.9096849943111246,
    ],
    &[
        0.19145054422596028,
        0.46436276736551113,
        0.490757830674591,
        0.49696437212036876,
        0.4189992289965348,
        -0.29040785109069345,
    ],
    &[
        0.3150938230054532,
        0.7642591992734091,
        0.5200601778124911,
        0.07702933609435092,
        0.0006042558186408194,
        -0.09124735623120118,
        -0.15875821558265998,
        0.08183541840188055,
    ],
];

static RIGHT4: [&[f64]; 4] = [
    &[
        0.06437934568626213,
        -0.02519180850664396,
        0.059477711238407505,
        0.39191428098156655,
        0.9154705188381086,
    ],
    &[
        0.041268408805739586,
        -0.01614201190428792,
        -0.15813389438931388,
        0.3937758156614859,
        0.7540005083959682,
        0.44880017813063044,
        -0.21916264686360398,
    ],
    &[
        0.03214874197077713,
        -0.012574882110017059,
        -0.10276635357182394,
        0.29864733458521475,
        0.8164119741929873,
        0.46061685367679245,
        0.02921367949607608,
        -0.13907160056079415,
        0.012900782893843634,
    ],
    &[
        0.032210278399291595,
        -0.01259895189585018,
        -0.09910804055009957,
        0.29771110110016363,
        0.8039495996141202,
        0.49779208211653975,
        -0.030235884812807083,
        -0.06765916174003847,
        -0.017709184245907807,
        0.019132441289899008,
        -0.0067756036517274765,
    ],
];

static RIGHT5: [&[f64]; 5] = [
    &[
        0.07938922948417222,
        -0.08577516141167012,
        -0.31902924197598787,
        -0.3638895712046729,
        0.5590853113853176,
        0.6629994790741541,
    ],
    &[
        0.011266470516587874,
        -0.01216769628573392,
        -0.10639428776403234,
        0.015300071773858621,
        0.2773360273313567,
        0.5771521705081861,
        0.742992243147398,
        -0.16159766022020375,
    ],
    &[
        0.01860648983960704,
        -0.020094857300571773,
        -0.15694827502886677,
        0.004995700940644948,
        0.5608421201658472,
        0.6469374504135535,
        0.4163708782365385,
        0.01290658921456949,
        -0.039951813918933966,
        0.2576681838329059,
    ],
    &[
        0.01929513522999067,
        -0.020838588706642715,
        -0.17219475425504807,
        0.015373194557528343,
        0.6131240289286537,
        0.7199998122635793,
        0.24666446009868048,
        0.015208813373916228,
        -0.06596188737147084,
        0.0047511571582816384,
        0.038956165318358625,
        -0.08955158953218498,
    ],
    &[
        0.01953080957647752,
        -0.02109311507904734,
        -0.17516744707115162,
        0.016499990722465118,
        0.632759044322974,
        0.7233635779492723,
        0.20453346627882724,
        -0.036925244644784985,
        0.02156026058080689,
        0.017082964484285076,
        0.01830645747439226,
        0.0027280935414564266,
        -0.00655924748210164,
        0.015465834960642988,
    ],
];

static RIGHT6: [&[f64]; 6] = [
    &[
        -0.012375536239642269,
        0.002804629640220022,
        -0.003311806997668439,
        -0.01688947162902161,
        0.04986459778239064,
        0.3793343885208502,
        0.9236675275289146,
    ],
    &[
        -0.00799210395621168,
        0.001811083865090948,
        0.04772996267897205,
        -0.022011050419157387,
        0.046134654227635755,
        0.3279016731686669,
        0.6494435367140928,
        0.6209232595989631,
        -0.28319550719153486,
    ],
    &[
        -0.007974169836340465,
        0.001807019829473879,
        0.04514540542689445,
        -0.021398522641797008,
        -0.06897565912132145,
        0.3434709840547833,
        0.6511436244540351,
        0.5662575494213521,
        0.05898718517474287,
        -0.3264117353738387,
        0.14158899500014885,
    ],
    &[
        -0.007631901801125825,
        0.001729458761761311,
        0.043570380951896005,
        -0.020562246885326988,
        -0.06885203537231867,
        0.32985358640615764,
        0.7598885401580753,
        0.4921890165592785,
        0.0749289363228677,
        -0.18154416043176816,
        -0.09208945297662509,
        0.12519773530199876,
        -0.04080929145809117,
    ],
    &[
        -0.007776580121693445,
        0.0017622441926621218,
        0.044459951522654285,
        -0.020966459797211328,
        -0.07161554541464724,
        0.3365261768548654,
        0.7831063037084287,
        0.49533033408017524,
        -0.030792645967796413,
        -0.11435928011298588,
        -0.04470160402549189,
        0.04181351746107669,
        0.03222685441051704,
        -0.03879928306325937,
        0.014733383852612227,
    ],
    &[
        -0.0078000966414962635,
        0.0017675732511692839,
        0.044713734629131995,
        -0.021056905247358534,
        -0.07256793624262388,
        0.33787771687401225,
        0.7873827095561112,
        0.49140564937592834,
        -0.047195243374882914,
        -0.1184137621929546,
        0.0006356609841783061,
        0.014784267615654956,
        0.007905498253020312,
        -0.004697326198534507,
        -0.004653920620454514,
        0.005934267128368014,
        -0.0022797784620492583,
    ],
];

static RIGHT7: [&[f64]; 7] = [
    &[
        0.002377975297958145,
        0.0009290995298515139,
        -0.008468475603842604,
        -0.028852436932319786,
        -0.04985469571296486,
        0.008463996975334419,
        0.41229567023555475,
        0.9091449027449604,
    ],
    &[
        0.00201934875024016,
        0.000788658317770273,
        -0.016637933751619365,
        -0.025769967124932236,
        -0.001505090528901996,
        0.0968004084140943,
        0.3295936377713549,
        0.6425124921338298,
        0.6287804832904899,
        -0.2699308042119349,
    ],
    &[
        0.004098367095939171,
        0.0016006206451976263,
        -0.035096168764710715,
        -0.0527989688247159,
        0.03790996945670534,
        0.20066081709551223,
        0.398465131526829,
        0.5651956497915652,
        0.5343306371043328,
        0.09979560411888815,
        -0.36609616279763335,
        0.21574026878912902,
    ],
    &[
        0.006542464172956835,
        0.002555164771861606,
        -0.06206801689390667,
        -0.08664578081562921,
        0.11341769088621442,
        0.39848676655089454,
        0.5314908190425346,
        0.5170449138311742,
        0.3349988297302883,
        0.04306729543563778,
        -0.2314941689473603,
        -0.1489636837681641,
        0.2497494924503823,
        -0.12199992499778771,
    ],
    &[
        0.008957782051121868,
        0.003498469158707888,
        -0.09029360084089397,
        -0.12070773098119437,
        0.21020936267151744,
        0.6177120461841634,
        0.5955739149563819,
        0.32526955706218136,
        0.09927107275688425,
        -0.09002913124954205,
        -0.1403852744891162,
        -0.054564055234443375,
        0.11102613200254684,
        0.1150002071095752,
        -0.1425076587541524,
        0.06643773698729014,
    ],
    &[
        0.010095401903166507,
        0.003942767528996274,
        -0.10508577182175938,
        -0.13733597271282125,
        0.2730680885196487,
        0.7419995863920157,
        0.5654368498591722,
        0.1012109979724836,
        -0.039863507878867686,
        -0.02663146893682986,
        -0.023111275181564868,
        0.030803520242852076,
        0.054430812673781664,
        0.029816573837220663,
        -0.03543504435614628,
        -0.049132681379390954,
        0.05451727816303337,
        -0.02472698997533295,
    ],
    &[
        0.010263984575223766,
        0.004008607630431988,
        -0.10771080338112389,
        -0.13996920087185372,
        0.28781322655878133,
        0.7666684946023926,
        0.5390029056533114,
        0.023373852816827283,
        -0.0525003317422317,
        0.05527738563200761,
        0.028650537646204826,
        0.0013921009288308556,
        0.007407888981289575,
        -0.0029285597292611283,
        -0.008281419893270695,
        -0.0054261640106087975,
        0.005263347827069487,
        0.00867506642142001,
        -0.009082349864401732,
        0.0040609659374833025,
    ],
];

static RIGHT8: [&[f64]; 8] = [
    &[
        0.002542121693430037,
        -0.00040745494232365836,
        0.0002253426545908093,
        0.0018817242214182114,
        -0.003547264353495344,
        -0.010728569662097738,
        0.05169019499594573,
        0.36854827717201916,
        0.9280961080490737,
    ],
    &[
        0.0015662136372759793,
        -0.0002510321212922127,
        -0.011921172848062933,
        0.00308106324989275,
        -0.0030950822106668306,
        -0.015325073778952059,
        0.04300012686134352,
        0.2730170577192075,
        0.6540393284427632,
        0.6422316270702473,
        -0.28807153373731587,
    ],
    &[
        0.0015426974493637667,
        -0.00024726295570981087,
        -0.011335378538059613,
        0.0029695654061228966,
        0.031705277340657825,
        -0.02022141803504121,
        0.0421513709037014,
        0.276557321459352,
        0.5757733437235917,
        0.6186900269832913,
        0.16550063543262183,
        -0.3928508187547072,
        0.15546996617933342,
    ],
    &[
        0.0017124660404209588,
        -0.0002744734003947383,
        -0.012969424833595778,
        0.0033583243046388426,
        0.03904642047565956,
        -0.023352765937923226,
        -0.023181106294463853,
        0.31979870673408173,
        0.6031889612643174,
        0.5747752997690717,
        0.19511237537235496,
        -0.23252631827632367,
        -0.19030817535239575,
        0.25254801538345006,
        -0.09273812077354579,
    ],
    &[
        0.0017943038666053156,
        -0.0002875903357987317,
        -0.013944887747288165,
        0.0035758220342481622,
        0.044242553032112046,
        -0.025268290494054834,
        -0.03881329227583329,
        0.3414317953667535,
        0.7137757767071109,
        0.5129116027762616,
        0.11436402800969628,
        -0.1727866354685581,
        -0.1584871307181298,
        0.07138489313285848,
        0.12781144034247005,
        -0.12407678511626206,
        0.04096472124186573,
    ],
    &[
        0.0018700198152499469,
        -0.0002997260590178016,
        -0.014708684041815367,
        0.0037548195264164932,
        0.047830920783301194,
        -0.026741495131980313,
        -0.048101030609291474,
        0.35911000531959225,
        0.761889595095942,
        0.49487043633383065,
        -0.014091914913105599,
        -0.1444748191000133,
        -0.07337937480550889,
        0.045470757524780525,
        0.0696825627180773,
        -0.01894676575462246,
        -0.05704547541527028,
        0.05295161533007957,
        -0.017901912825709947,
    ],
    &[
        0.0018884784438167274,
        -0.00030268460092739894,
        -0.014929820974998582,
        0.003804055936392535,
        0.04899043648773276,
        -0.027172380989538836,
        -0.051413182902741855,
        0.36395146487851254,
        0.7753953496416314,
        0.48346626343334614,
        -0.05484912619725227,
        -0.14543569479820126,
        -0.005393073090969685,
        0.03159516732062222,
        0.021772529276540904,
        -0.007951972462634464,
        -0.018076161457738826,
        0.0036357041596144094,
        0.015647736187338914,
        -0.014358181152590311,
        0.004842573878230876,
    ],
    &[
        0.0018899287550021185,
        -0.00030291705624814036,
        -0.014951731496306093,
        0.0038086514487096273,
        0.04913249791918948,
        -0.027217792575194452,
        -0.05192289139131277,
        0.36442953238938264,
        0.7771077176310995,
        0.4814477634458874,
        -0.060983053161673816,
        -0.1435014917265219,
        0.006823471189241819,
        0.031939363330842706,
        0.0010381714735562964,
        -0.0033689177137355814,
        -0.002736289414200398,
        0.0006409242846523035,
        0.002085884180381896,
        -0.0003621632495466122,
        -0.001931250903951456,
        0.001750384586075618,
        -0.0005886912729376364,
    ],
];

/// Left edge rows for `order`, if tabulated
pub fn left_boundary_table(order: usize) -> Option<&'static [&'static [f64]]> {
    match order {
        2 => Some(&LEFT2),
        3 => Some(&LEFT3),
        4 => Some(&LEFT4),
        5 => Some(&LEFT5),
        6 => Some(&LEFT6),
        7 => Some(&LEFT7),
        8 => Some(&LEFT8),
        _ => None,
    }
}

/// Right edge rows for `order`, if tabulated
pub fn right_boundary_table(order: usize) -> Option<&'static [&'static [f64]]> {
    match order {
        2 => Some(&RIGHT2),
        3 => Some(&RIGHT3),
        4 => Some(&RIGHT4),
        5 => Some(&RIGHT5),
        6 => Some(&RIGHT6),
        7 => Some(&RIGHT7),
        8 => Some(&RIGHT8),
        _ => None,
    }
}
